#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub hp: i32,
    pub damage: i32,
}

pub static MONSTERS: [MonsterTemplate; 3] = [
    MonsterTemplate { name: "kiwi", glyph: 'k', hp: 2, damage: 1 },
    MonsterTemplate { name: "goblin", glyph: 'g', hp: 10, damage: 1 },
    MonsterTemplate { name: "panda", glyph: 'P', hp: 40, damage: 1 },
];

#[cfg(test)]
pub(crate) fn monster_template(name: &str) -> Option<&'static MonsterTemplate> {
    MONSTERS.iter().find(|template| template.name == name)
}
