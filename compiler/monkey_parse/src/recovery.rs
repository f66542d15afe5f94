//! Top-level error recovery.

use monkey_ir::TokenKind;

use crate::cursor::Cursor;

/// Skip to the start of the next top-level statement after a failed one.
///
/// Always moves past the token the cursor sits on (unless at the end), then
/// stops just after a `;` or right before a `let`/`return`, but only once
/// every block opened by the broken statement has been closed. A `;` under
/// the cursor is taken as the end of the broken statement, so a valid
/// statement that follows it is not swallowed.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>) {
    match cursor.current_kind() {
        TokenKind::End => return,
        TokenKind::Semicolon if cursor.depth() == 0 => {
            cursor.advance();
            return;
        }
        _ => cursor.advance(),
    }

    loop {
        match cursor.current_kind() {
            TokenKind::End => return,
            _ if cursor.depth() > 0 => cursor.advance(),
            TokenKind::Let | TokenKind::Return => return,
            TokenKind::Semicolon => {
                cursor.advance();
                return;
            }
            _ => cursor.advance(),
        }
    }
}
