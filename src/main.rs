#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use iced::Theme;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petcare_agenda=info".into()),
        )
        .init();

    iced::application("PetCare — Agendamento de Consultas", app::update, app::view)
        .theme(|_| Theme::Light)
        .window(iced::window::Settings {
            size: iced::Size::new(560.0, 820.0),
            ..Default::default()
        })
        .run_with(app::init)
}
