pub mod posts;
pub mod taxonomy;

use crate::prelude::{println, *};

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Shorten `text` to `max_chars` characters, appending "..." when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    }
}
