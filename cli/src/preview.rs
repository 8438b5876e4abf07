use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use weekplan_core::FormController;

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "Day")]
    day: &'static str,
    #[tabled(rename = "On")]
    checked: &'static str,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Saved")]
    saved: &'static str,
}

pub fn render_rows(form: &FormController) -> String {
    let rows: Vec<PreviewRow> = form
        .rows()
        .iter()
        .map(|row| PreviewRow {
            day: row.day().label(),
            checked: if row.is_checked() { "x" } else { "" },
            time: if row.is_enabled() {
                format!("{:?}", row.text())
            } else {
                "-".to_string()
            },
            saved: if row.entry().is_some() { "yes" } else { "no" },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}
