use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct MonsterId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }

    /// Squared straight-line distance. Orders positions exactly like the
    /// Euclidean distance without leaving integer arithmetic.
    pub fn distance_sq(self, other: Pos) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    pub fn is_adjacent(self, other: Pos) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// The 4-neighborhood in evaluation order: left, right, up, down.
    pub fn neighbors(self) -> [Pos; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Floor,
    WallHorizontal,
    WallVertical,
    Door,
    Corridor,
    Trap { revealed: bool },
    StairsUp,
    StairsDown,
    MonsterOccupied,
    PlayerOccupied,
    /// Cell claimed by a corridor search that has not committed yet.
    Reserved,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            Tile::Floor
                | Tile::Door
                | Tile::Corridor
                | Tile::StairsUp
                | Tile::StairsDown
                | Tile::Trap { revealed: true }
        )
    }

    pub fn is_trap(self) -> bool {
        matches!(self, Tile::Trap { .. })
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Tile::WallHorizontal | Tile::WallVertical)
    }

    /// Corridor search may pass through untouched space and existing corridors.
    pub fn is_carvable(self) -> bool {
        matches!(self, Tile::Empty | Tile::Corridor)
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Floor => '.',
            Tile::WallHorizontal => '-',
            Tile::WallVertical => '|',
            Tile::Door => '+',
            Tile::Corridor => '#',
            // Hidden traps look like floor until stepped on.
            Tile::Trap { revealed: false } => '.',
            Tile::Trap { revealed: true } => '^',
            Tile::StairsUp => '<',
            Tile::StairsDown => '>',
            Tile::MonsterOccupied => 'm',
            Tile::PlayerOccupied => '@',
            Tile::Reserved => '$',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Wait,
    Ascend,
    Descend,
    Quit,
}

impl Action {
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'h' => Some(Action::Move(Direction::Left)),
            'j' => Some(Action::Move(Direction::Down)),
            'k' => Some(Action::Move(Direction::Up)),
            'l' => Some(Action::Move(Direction::Right)),
            '.' => Some(Action::Wait),
            '<' => Some(Action::Ascend),
            '>' => Some(Action::Descend),
            'q' => Some(Action::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    Playing,
    Dead,
    Quit,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunState::Playing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    TrapTriggered { pos: Pos, damage: i32 },
    PlayerHit { monster: String, damage: i32 },
    MonsterKilled { monster: String },
    MonsterAttacked { monster: String, damage: i32 },
    Regenerated { hp: i32 },
    ChangedLevel { depth: usize },
    PlayerDied,
}

impl LogEvent {
    /// Events the host must hold on screen for an extra keystroke.
    pub fn is_pausing(&self) -> bool {
        matches!(self, LogEvent::TrapTriggered { .. } | LogEvent::MonsterKilled { .. })
    }

    pub fn message(&self) -> Option<String> {
        match self {
            LogEvent::TrapTriggered { .. } => Some("Ouch, it's a trap!".to_string()),
            LogEvent::MonsterKilled { monster } => {
                Some(format!("You've done it, you killed a {monster}!"))
            }
            LogEvent::PlayerDied => Some("You died. gg".to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<LogEvent>,
    pub pause: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationWarning {
    UnreachableConnection { from_room: usize, to_room: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: i32, height: i32, min: i32 },
    #[error("range {name} is empty: {min} > {max}")]
    EmptyRange { name: &'static str, min: i32, max: i32 },
    #[error("rooms must be at least {min} cells on each side to hold walls and contents")]
    RoomTooSmall { min: i32 },
    #[error("at least two rooms are needed to hold both staircases, got min_rooms={min_rooms}")]
    TooFewRooms { min_rooms: i32 },
    #[error("{min_rooms} rooms of the minimum size cannot fit in a {width}x{height} grid")]
    RoomsDoNotFit { min_rooms: i32, width: i32, height: i32 },
    #[error("probability {name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "could not place {requested} rooms after {layouts} layout attempts (best: {placed}); \
         the room ranges are too large for the grid"
    )]
    PlacementExhausted { requested: usize, placed: usize, layouts: u32 },
    #[error("no free interior cells for both staircases among {rooms} rooms")]
    StairsUnplaceable { rooms: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("the run has already ended")]
    RunFinished,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
