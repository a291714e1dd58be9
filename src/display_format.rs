#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DisplayFormat {
    pub unicode: bool,
    pub effects: bool,
    pub concise: bool,
}

impl DisplayFormat {
    pub fn pretty() -> Self {
        Self {
            unicode: true,
            effects: true,
            concise: false,
        }
    }

    pub fn string() -> Self {
        Self {
            unicode: false,
            effects: false,
            concise: false,
        }
    }

    pub fn with_concise(&self, concise: bool) -> Self {
        Self { concise, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn concise_keeps_other_options() {
        let format = DisplayFormat::pretty().with_concise(true);
        assert!(format.unicode && format.effects && format.concise);
        assert_eq!(format.with_concise(false), DisplayFormat::pretty());
    }

    #[test]
    fn string_format_is_plain_text() {
        let text = Board::opening().display(DisplayFormat::string()).to_string();
        assert!(text.is_ascii());
        assert!(!text.contains('\x1B'));

        let text = Board::opening().display(DisplayFormat::pretty()).to_string();
        assert!(text.contains('\x1B'));
        assert!(text.contains('⛀'));
    }
}
