//! Frame rendering
//!
//! Pure functions from application state to a text frame; the binary owns
//! all terminal I/O. The chart gives one column to each integer age and
//! five perceived years to each row.

use aion_core::Model;
use aion_locale::strings;
use aion_model::{perceive, tabulate};

use crate::app::App;

const CHART_WIDTH: usize = 80;
const CHART_ROWS: usize = 17;
const YEARS_PER_ROW: f64 = 80.0 / (CHART_ROWS as f64 - 1.0);

/// Render one full frame.
pub fn render(app: &App) -> String {
    let t = strings(app.locale);
    let value = perceive(app.age).for_model(app.model);

    let mut frame = String::new();
    frame.push_str(t.title);
    frame.push('\n');
    frame.push_str(t.subtitle);
    frame.push_str("\n\n");

    frame.push_str(&selector(app));
    frame.push_str("\n\n");

    // A live entry buffer replaces the committed age until Enter.
    let shown_age = match app.entry {
        Some(n) => format!("{n}_"),
        None => app.age.to_string(),
    };
    frame.push_str(&format!("{}: {} {}\n", t.enter_age, shown_age, t.years_old));
    frame.push_str(&format!(
        "{}: {:.1} {}\n\n",
        t.perceived_age, value, t.years_old
    ));

    frame.push_str(t.graph);
    frame.push('\n');
    frame.push_str(&chart(app, value));

    if app.show_about {
        frame.push('\n');
        frame.push_str(&about(app));
    }

    frame.push_str("\n[<-/->] [PgUp/PgDn] [0-9 Enter] age | m model | l language | a about | q quit\n");
    frame
}

/// Two-way model selector, brackets around the active model.
fn selector(app: &App) -> String {
    let t = strings(app.locale);
    let mark = |model: Model, label: &str| -> String {
        if app.model == model {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };
    format!(
        "{}  {}",
        mark(Model::SubjectiveTime, t.subjective_time_model),
        mark(Model::RealTime, t.real_time_model),
    )
}

/// Plot the active model's curve with reference lines at the current age
/// (vertical) and perceived value (horizontal), the curve drawn on top.
fn chart(app: &App, value: f64) -> String {
    let age_col = app.age.years() as usize - 1;
    let value_row = row_for(value);

    let mut grid = [[' '; CHART_WIDTH]; CHART_ROWS];
    for row in grid.iter_mut() {
        row[age_col] = ':';
    }
    for cell in grid[value_row].iter_mut() {
        if *cell == ' ' {
            *cell = '.';
        }
    }
    for point in tabulate() {
        let col = point.age.years() as usize - 1;
        grid[row_for(point.for_model(app.model))][col] = '*';
    }

    // Rows print top-down; row 0 holds perceived age zero.
    let mut out = String::new();
    for row in (0..CHART_ROWS).rev() {
        if row % 4 == 0 {
            out.push_str(&format!("{:>4} |", (row as f64 * YEARS_PER_ROW) as u32));
        } else {
            out.push_str("     |");
        }
        out.extend(grid[row].iter());
        out.push('\n');
    }

    out.push_str("     +");
    out.push_str(&"-".repeat(CHART_WIDTH));
    out.push('\n');

    let mut ticks = [' '; CHART_WIDTH];
    ticks[0] = '1';
    for age in [20usize, 40, 60, 80] {
        let label = age.to_string();
        let start = age - label.len();
        for (i, ch) in label.chars().enumerate() {
            ticks[start + i] = ch;
        }
    }
    out.push_str("      ");
    out.extend(ticks.iter());
    out.push('\n');
    out
}

fn about(app: &App) -> String {
    let t = strings(app.locale);
    let mut out = String::new();
    out.push_str(t.about_title);
    out.push('\n');
    out.push_str(t.about_description);
    out.push_str("\n\n");
    out.push_str(t.models_title);
    out.push('\n');
    out.push_str(&format!("- {}: {}\n", t.real_time_model, t.real_time_desc));
    out.push_str(&format!(
        "- {}: {}\n\n",
        t.subjective_time_model, t.subjective_time_desc
    ));
    out.push_str(&format!("\"{}\"\n", t.quote));
    out.push_str(&format!("({})\n", t.source));
    out
}

/// Map a perceived value onto a chart row, clamped to the top row.
fn row_for(value: f64) -> usize {
    ((value / YEARS_PER_ROW).round() as usize).min(CHART_ROWS - 1)
}
