// Grid model for one step of the Gray code walk
//
// Rows are codes in sequence order, columns are bit positions with the most
// significant bit on the left. Painting the model is left to `paint`.

use graycode_utils::{bit_label, GrayCodeSequence, StepStatus};

pub const X_AXIS_LABEL: &str = "Bit Position";
pub const Y_AXIS_LABEL: &str = "Code Index";

/// Display state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Row not reached yet
    Hidden,
    /// Row already walked past
    Visited(u8),
    /// Cell of the current row
    Current(u8),
    /// The cell of the current row whose bit just flipped
    Flipped(u8),
}

impl CellState {
    pub fn bit(&self) -> Option<u8> {
        match self {
            CellState::Hidden => None,
            CellState::Visited(bit) | CellState::Current(bit) | CellState::Flipped(bit) => {
                Some(*bit)
            }
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub title: String,
    pub column_labels: Vec<String>,
    pub rows: Vec<Vec<CellState>>,
    pub status: StepStatus,
}

impl GridView {
    pub fn width(&self) -> usize {
        self.column_labels.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

pub fn title(sequence: &GrayCodeSequence) -> String {
    format!("{}-bit Binary Reflected Gray Code", sequence.n_bits())
}

/// Build the view of step `frame`.
///
/// Panics if `frame` is not a valid index into `sequence`.
pub fn render(frame: usize, sequence: &GrayCodeSequence) -> GridView {
    assert!(
        frame < sequence.code_count(),
        "frame {} out of range for {} codes",
        frame,
        sequence.code_count()
    );
    let bits = sequence.bits();
    let width = bits.width();
    let flipped = sequence.changed_bit(frame);

    let rows = (0..bits.height())
        .map(|y| {
            (0..width)
                .map(|x| {
                    let bit = bits.bit(y, x);
                    if y < frame {
                        CellState::Visited(bit)
                    } else if y > frame {
                        CellState::Hidden
                    } else if flipped == Some(x) {
                        CellState::Flipped(bit)
                    } else {
                        CellState::Current(bit)
                    }
                })
                .collect()
        })
        .collect();

    GridView {
        title: title(sequence),
        column_labels: (0..width).map(|x| bit_label(width, x)).collect(),
        rows,
        status: sequence.step(frame),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graycode_utils::BitWidth;

    fn sequence(n: u32) -> GrayCodeSequence {
        GrayCodeSequence::generate(BitWidth::new(n).unwrap())
    }

    #[test]
    fn test_first_frame() {
        let view = render(0, &sequence(2));
        assert_eq!(view.title, "2-bit Binary Reflected Gray Code");
        assert_eq!(view.column_labels, vec!["b1", "b0"]);
        assert_eq!(view.rows[0], vec![CellState::Current(0), CellState::Current(0)]);
        assert!(view.rows[1..]
            .iter()
            .all(|row| row.iter().all(|c| *c == CellState::Hidden)));
        assert_eq!(view.status.to_string(), "Step 0: 00 (starting code)");
    }

    #[test]
    fn test_flipped_cell_is_marked() {
        let view = render(2, &sequence(2));
        assert_eq!(view.rows[0], vec![CellState::Visited(0), CellState::Visited(0)]);
        assert_eq!(view.rows[1], vec![CellState::Visited(0), CellState::Visited(1)]);
        assert_eq!(view.rows[2], vec![CellState::Flipped(1), CellState::Current(1)]);
        assert_eq!(view.rows[3], vec![CellState::Hidden, CellState::Hidden]);
        assert_eq!(view.status.to_string(), "Step 2: 11 (bit 0 flipped)");
    }

    #[test]
    fn test_exactly_one_flipped_cell_after_start() {
        let seq = sequence(4);
        for frame in 1..seq.code_count() {
            let view = render(frame, &seq);
            let flipped = view
                .rows
                .iter()
                .flatten()
                .filter(|c| matches!(c, CellState::Flipped(_)))
                .count();
            assert_eq!(flipped, 1, "frame {}", frame);
        }
    }

    #[test]
    fn test_last_frame_shows_every_bit() {
        let seq = sequence(3);
        let view = render(seq.code_count() - 1, &seq);
        for (y, row) in view.rows.iter().enumerate() {
            let bits: Vec<u8> = row.iter().filter_map(CellState::bit).collect();
            assert_eq!(bits, seq.bits().row(y));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_frame_out_of_range() {
        render(4, &sequence(2));
    }
}
