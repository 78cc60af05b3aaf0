use crate::ui;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Fill, Task};
use petcare_agenda::{AppointmentForm, Field, Handoff};

const SERVICES: [(&str, &str); 4] = [
    (
        "Consultas de Rotina",
        "Acompanhamento completo da saúde do seu pet com profissionais especializados.",
    ),
    ("Vacinação", "Programa completo de vacinação para cães e gatos."),
    (
        "Cirurgias",
        "Procedimentos cirúrgicos com equipamentos modernos e equipe especializada.",
    ),
    ("Exames Laboratoriais", "Diagnósticos precisos com resultados rápidos."),
];

const OPENING_HOURS: [&str; 3] = [
    "Segunda a Sexta: 08h às 19h",
    "Sábado: 08h às 14h",
    "Domingo: Fechado",
];

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
    HandoffOpened(Result<String, String>),
}

pub struct State {
    form: AppointmentForm,
    status_message: String,
    min_date: String,
}

impl State {
    pub fn new() -> Self {
        Self {
            form: AppointmentForm::new(),
            status_message: String::new(),
            min_date: petcare_agenda::today_iso(),
        }
    }
}

pub fn init() -> (State, Task<Message>) {
    (State::new(), Task::none())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::FieldChanged(field, value) => {
            state.form.field_changed(field, value);
            state.status_message.clear();
            Task::none()
        }
        Message::Submit => {
            state.status_message.clear();
            match state.form.submit() {
                Some(handoff) => Task::perform(open_handoff_async(handoff), Message::HandoffOpened),
                None => Task::none(),
            }
        }
        Message::HandoffOpened(result) => {
            match result {
                Ok(msg) => state.status_message = msg,
                Err(e) => {
                    state.status_message =
                        petcare_agenda::AgendaError::HandoffFailed(e).to_portuguese();
                }
            }
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let content = column![
        view_header(),
        Space::with_height(15),
        view_services(),
        Space::with_height(15),
        view_about(),
        Space::with_height(15),
        view_appointment_card(state),
        Space::with_height(15),
        view_contact(),
    ]
    .spacing(5)
    .padding(15);

    container(scrollable(content)).width(Fill).height(Fill).into()
}

fn view_header() -> Element<'static, Message> {
    column![
        text("PetCare").size(30),
        text("Cuidado especializado para seu melhor amigo").size(18),
        text("Oferecemos atendimento veterinário de excelência com amor e dedicação para seu pet")
            .size(14)
            .color(iced::Color::from_rgb(0.45, 0.45, 0.5)),
    ]
    .spacing(8)
    .padding(15)
    .into()
}

fn view_services() -> Element<'static, Message> {
    let mut cards = column![ui::section_title("Nossos Serviços")].spacing(10);

    for (title, description) in SERVICES {
        cards = cards.push(ui::service_card(title, description));
    }

    container(cards.padding(10)).width(Fill).into()
}

fn view_about() -> Element<'static, Message> {
    let content = column![
        ui::section_title("Sobre Nossa Clínica"),
        text(
            "Com mais de 15 anos de experiência, nossa clínica veterinária é referência em \
             cuidados com animais. Contamos com uma equipe altamente qualificada e instalações \
             modernas para oferecer o melhor atendimento para seu pet."
        )
        .size(14),
        ui::bullet("Equipe especializada e dedicada"),
        ui::bullet("Equipamentos de última geração"),
        ui::bullet("Atendimento humanizado"),
    ]
    .spacing(10)
    .padding(10);

    container(content).width(Fill).into()
}

fn view_appointment_card(state: &State) -> Element<'_, Message> {
    let draft = state.form.draft();

    let mut content = column![
        ui::section_title("Agende uma Consulta"),
        row![
            ui::form_field("Nome", &draft.name, |v| Message::FieldChanged(
                Field::Name,
                v
            )),
            ui::form_field("Nome do Pet", &draft.pet_name, |v| Message::FieldChanged(
                Field::PetName,
                v
            )),
        ]
        .spacing(10),
        row![
            ui::form_field_hint("Data", &draft.date, &state.min_date, |v| {
                Message::FieldChanged(Field::Date, v)
            }),
            ui::form_field_hint("Horário", &draft.time, "08:00", |v| {
                Message::FieldChanged(Field::Time, v)
            }),
        ]
        .spacing(10),
        ui::form_field("Observações", &draft.notes, |v| Message::FieldChanged(
            Field::Notes,
            v
        )),
    ]
    .spacing(12)
    .padding(22);

    if let Some(error) = state.form.error() {
        content = content.push(ui::error_box(error));
    }

    if !state.status_message.is_empty() {
        content = content.push(ui::status_box(&state.status_message));
    }

    let mut hours = column![ui::label_text("Horário de Funcionamento:")].spacing(4);
    for line in OPENING_HOURS {
        hours = hours.push(text(line).size(13));
    }
    content = content.push(hours);

    content = content.push(Space::with_height(10)).push(
        container(
            button("Agendar via WhatsApp")
                .on_press(Message::Submit)
                .padding(10),
        )
        .center_x(Fill),
    );

    container(content)
        .width(Fill)
        .style(|theme| {
            ui::card_style(
                theme,
                iced::Color::from_rgb(0.93, 0.96, 1.0),
                iced::Color::from_rgb(0.55, 0.65, 0.85),
            )
        })
        .into()
}

fn view_contact() -> Element<'static, Message> {
    let content = column![
        ui::section_title("Contato"),
        ui::info_row("Telefone:", text("(86) 99560-7681").size(14)),
        ui::info_row("E-mail:", text("contato@petcare.com.br").size(14)),
        ui::info_row("Endereço:", text("Rua das Flores, 123 — São Paulo - SP").size(14)),
        text("© 2024 PetCare. Todos os direitos reservados.")
            .size(12)
            .color(iced::Color::from_rgb(0.5, 0.5, 0.55)),
    ]
    .spacing(8)
    .padding(10);

    container(content).width(Fill).into()
}

async fn open_handoff_async(handoff: Handoff) -> Result<String, String> {
    use anyhow::Context;

    let url = handoff.url();
    open::that(&url)
        .with_context(|| format!("abrindo {}", url))
        .map_err(|e| e.to_string())?;

    Ok("Abrindo o WhatsApp para concluir o agendamento...".to_string())
}
