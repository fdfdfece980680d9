use crate::compiler::source::Position;

#[derive(Debug, Clone, Copy)]
struct State {
    index: usize,
    position: Position,
    after_cr: bool,
}

/// Character reader over source text with a single step of pushback.
///
/// `read` returns `None` once the input is exhausted. Reading past the end
/// is allowed and can be undone like any other read.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<(usize, char)>,
    len: usize,
    state: State,
    previous: Option<State>,
}

impl Cursor {
    pub fn new(code: &str, initial_line: usize) -> Self {
        Self {
            chars: code.char_indices().collect(),
            len: code.len(),
            state: State {
                index: 0,
                position: Position::new(0, initial_line, 1),
                after_cr: false,
            },
            previous: None,
        }
    }

    /// Position of the next character to be read.
    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn read(&mut self) -> Option<char> {
        self.previous = Some(self.state);

        let (_, ch) = match self.chars.get(self.state.index) {
            Some(entry) => *entry,
            None => return None,
        };

        self.state.index += 1;
        self.state.position.offset = self
            .chars
            .get(self.state.index)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.len);

        match ch {
            '\n' if self.state.after_cr => {
                // second half of \r\n, the line was already counted
                self.state.after_cr = false;
            }
            '\n' | '\r' => {
                self.state.position.line += 1;
                self.state.position.column = 1;
                self.state.after_cr = ch == '\r';
            }
            _ => {
                self.state.position.column += 1;
                self.state.after_cr = false;
            }
        }

        Some(ch)
    }

    /// Undoes the last `read`.
    ///
    /// # Panics
    ///
    /// Panics if called twice without a `read` in between.
    pub fn unread(&mut self) {
        match self.previous.take() {
            Some(state) => self.state = state,
            None => panic!("[BUG] unread called twice without an intervening read"),
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read();
        self.unread();
        ch
    }

    pub fn is_at_end(&self) -> bool {
        self.state.index >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_unread() {
        let mut cursor = Cursor::new("ab", 1);

        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.position(), Position::new(1, 1, 2));
        cursor.unread();
        assert_eq!(cursor.position(), Position::new(0, 1, 1));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.read(), Some('b'));
        assert_eq!(cursor.read(), None);
        cursor.unread();
        assert_eq!(cursor.read(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nb\r\nc\rd", 10);

        while cursor.read().is_some() {}

        assert_eq!(cursor.position().line, 13);
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_unread_restores_line() {
        let mut cursor = Cursor::new("\r\nx", 1);

        cursor.read();
        cursor.read();
        assert_eq!(cursor.position(), Position::new(2, 2, 1));
        cursor.unread();
        assert_eq!(cursor.position(), Position::new(1, 2, 1));
        assert_eq!(cursor.read(), Some('\n'));
        assert_eq!(cursor.position().line, 2);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut cursor = Cursor::new("é☆x", 1);

        cursor.read();
        assert_eq!(cursor.position(), Position::new(2, 1, 2));
        cursor.read();
        assert_eq!(cursor.position(), Position::new(5, 1, 3));
    }

    #[test]
    #[should_panic]
    fn test_double_unread_panics() {
        let mut cursor = Cursor::new("abc", 1);
        cursor.read();
        cursor.unread();
        cursor.unread();
    }
}
