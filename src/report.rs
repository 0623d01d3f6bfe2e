//! Text renderings of comparison results and sweeps

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::pricing::{Recommendation, Sweep};

/// Output format for sweep results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Lines of the result area for one point comparison
pub fn summary_lines(rec: &Recommendation, currency: &str) -> Vec<String> {
    vec![
        "Current parameters:".to_string(),
        format!("School network cost: {:.2} {}", rec.school, currency),
        format!(
            "Cybercafe cost: {:.2} {} (takes {:.0} hours)",
            rec.bar, currency, rec.hours_required
        ),
        format!("Recommendation: {}", rec.cheaper.display_name()),
        format!("Savings: {:.2} {}", rec.savings, currency),
    ]
}

pub fn summary_text(rec: &Recommendation, currency: &str) -> String {
    summary_lines(rec, currency).join("\n")
}

pub fn render_sweep(sweep: &Sweep, format: OutputFormat, currency: &str) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(sweep_table(sweep, currency)),
        OutputFormat::Csv => Ok(sweep_csv(sweep)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sweep)?),
    }
}

fn sweep_table(sweep: &Sweep, currency: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new(sweep.variable.to_string().to_uppercase()).fg(Color::Cyan),
        Cell::new(format!("SCHOOL ({})", currency)).fg(Color::Cyan),
        Cell::new(format!("CYBERCAFE ({})", currency)).fg(Color::Cyan),
        Cell::new("CHEAPER").fg(Color::Cyan),
    ]);

    for (idx, (sample, school, bar)) in sweep.rows().enumerate() {
        let (cheaper, color) = if bar < school {
            ("cybercafe", Color::Green)
        } else {
            ("school", Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(format!("{:.4}", sample)),
            Cell::new(format!("{:.2}", school)),
            Cell::new(format!("{:.2}", bar)),
            Cell::new(cheaper).fg(color),
        ]);
    }

    table.to_string()
}

fn sweep_csv(sweep: &Sweep) -> String {
    let mut out = format!("{},school,bar\n", sweep.variable);
    for (sample, school, bar) in sweep.rows() {
        out.push_str(&format!("{},{},{}\n", sample, school, bar));
    }
    out
}
