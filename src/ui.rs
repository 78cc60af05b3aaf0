use iced::widget::{column, container, row, text, text_input};
use iced::{Color, Element};

pub fn section_title(title: &str) -> text::Text<'_> {
    text(title).size(22)
}

pub fn label_text(label: &str) -> text::Text<'_> {
    text(label).size(14).color(Color::from_rgb(0.35, 0.35, 0.4))
}

pub fn info_row<'a, M: 'a>(
    label: &'a str,
    value: impl Into<Element<'a, M>>,
) -> iced::widget::Row<'a, M> {
    row![label_text(label).width(110), value.into()].spacing(10)
}

pub fn bullet(item: &str) -> text::Text<'_> {
    text(format!("• {}", item)).size(14)
}

pub fn service_card<'a, M: 'a>(title: &'a str, description: &'a str) -> container::Container<'a, M> {
    container(
        column![
            text(title).size(16),
            text(description)
                .size(13)
                .color(Color::from_rgb(0.4, 0.4, 0.45)),
        ]
        .spacing(4),
    )
    .padding(12)
    .style(container::rounded_box)
}

/// Labeled single-line input
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    on_input: impl Fn(String) -> M + 'a,
) -> iced::widget::Column<'a, M> {
    form_field_hint(label, value, "", on_input)
}

/// Labeled single-line input with a placeholder hint
pub fn form_field_hint<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    hint: &str,
    on_input: impl Fn(String) -> M + 'a,
) -> iced::widget::Column<'a, M> {
    column![
        label_text(label),
        text_input(hint, value).on_input(on_input).padding(8).size(14),
    ]
    .spacing(4)
}

pub fn card_style(_theme: &iced::Theme, bg_color: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_box<M>(message: &str) -> container::Container<'_, M> {
    container(
        text(message)
            .size(13)
            .color(Color::from_rgb(0.6, 0.1, 0.1)),
    )
    .padding(10)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(Color::from_rgb(1.0, 0.92, 0.92))),
        border: iced::Border {
            color: Color::from_rgb(0.85, 0.55, 0.55),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
}

pub fn status_box<M>(message: &str) -> container::Container<'_, M> {
    container(
        text(message)
            .size(13)
            .color(Color::from_rgb(0.1, 0.4, 0.15)),
    )
    .padding(10)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(Color::from_rgb(0.92, 1.0, 0.93))),
        border: iced::Border {
            color: Color::from_rgb(0.55, 0.8, 0.6),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
}
