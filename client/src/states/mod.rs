pub mod game;
pub mod game_over;
pub mod setup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Game,
    GameOver,
}
