// Turns a GridView into terminal text

use ansi_term::{Colour, Style};

use crate::grid::{CellState, GridView, X_AXIS_LABEL, Y_AXIS_LABEL};

const RESET: &str = "\x1b[0m";

const WHITE: Colour = Colour::RGB(255, 255, 255);
const LIGHT_GRAY: Colour = Colour::RGB(211, 211, 211);
const ALICE_BLUE: Colour = Colour::RGB(240, 248, 255);
const LIGHT_CORAL: Colour = Colour::RGB(240, 128, 128);

/// How cells are distinguished on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Text markers only: `·` hidden, `[b]` current row, `<b>` flipped bit
    Plain,
    /// Background colors, one per cell state
    Ansi,
}

impl RenderStyle {
    pub fn paint(&self, view: &GridView) -> String {
        let index_width = Y_AXIS_LABEL
            .len()
            .max(view.height().saturating_sub(1).to_string().len());
        let cells_width = (view.width() * 4).saturating_sub(1);

        let mut lines = Vec::with_capacity(view.height() + 6);
        lines.push(self.title(&view.title));
        lines.push(self.status(view));
        lines.push(String::new());
        lines.push(format!("{:w$}   {}", "", X_AXIS_LABEL, w = index_width));

        let labels: Vec<String> = view
            .column_labels
            .iter()
            .map(|label| format!("{:^3}", label))
            .collect();
        lines.push(format!(
            "{:>w$} │ {}",
            Y_AXIS_LABEL,
            labels.join(" "),
            w = index_width
        ));
        lines.push(format!(
            "{}┼{}",
            "─".repeat(index_width + 1),
            "─".repeat(cells_width + 1)
        ));

        for (y, row) in view.rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|cell| self.cell(*cell)).collect();
            lines.push(format!("{:>w$} │ {}", y, cells.join(" "), w = index_width));
        }

        lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<&str>>()
            .join("\n")
    }

    fn title(&self, title: &str) -> String {
        match self {
            RenderStyle::Plain => title.to_string(),
            RenderStyle::Ansi => Style::new().bold().paint(title).to_string(),
        }
    }

    fn status(&self, view: &GridView) -> String {
        match self {
            RenderStyle::Plain => view.status.to_string(),
            RenderStyle::Ansi => {
                format!("{}{}{}", view.status.kind().color_code(), view.status, RESET)
            }
        }
    }

    fn cell(&self, cell: CellState) -> String {
        match self {
            RenderStyle::Plain => match cell {
                CellState::Hidden => " · ".to_string(),
                CellState::Visited(bit) => format!(" {} ", bit),
                CellState::Current(bit) => format!("[{}]", bit),
                CellState::Flipped(bit) => format!("<{}>", bit),
            },
            RenderStyle::Ansi => {
                let (background, text) = match cell {
                    CellState::Hidden => (WHITE, "   ".to_string()),
                    CellState::Visited(bit) => (LIGHT_GRAY, format!(" {} ", bit)),
                    CellState::Current(bit) => (ALICE_BLUE, format!(" {} ", bit)),
                    CellState::Flipped(bit) => (LIGHT_CORAL, format!(" {} ", bit)),
                };
                let style = Colour::Black.on(background);
                let style = if matches!(cell, CellState::Flipped(_)) {
                    style.bold()
                } else {
                    style
                };
                style.paint(text).to_string()
            }
        }
    }
}
