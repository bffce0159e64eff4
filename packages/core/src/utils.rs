// ABOUTME: Shared utility functions for Taskdeck
// ABOUTME: ID generation

use crate::constants::TODO_ID_LENGTH;

/// Generate an opaque alphanumeric todo ID
pub fn generate_todo_id() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..TODO_ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_todo_id() {
        let id1 = generate_todo_id();
        let id2 = generate_todo_id();

        assert_eq!(id1.len(), TODO_ID_LENGTH);
        assert_eq!(id2.len(), TODO_ID_LENGTH);
        assert_ne!(id1, id2);

        assert!(id1.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(id2.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
