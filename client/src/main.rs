mod app;
mod game;
mod messages;
mod portrait;
mod states;
mod transport;
mod ui;

use app::App;

fn main() -> iced::Result {
    env_logger::init();
    iced::application("Hoopstreak", App::update, App::view)
        .theme(|_| iced::Theme::Dark)
        .window_size(iced::Size::new(1024.0, 720.0))
        .run()
}
