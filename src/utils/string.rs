//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join node indices as a closed walk, `0 → 1 → 2 → 0`, eliding the middle
/// of walks longer than `limit` nodes.
pub fn format_cycle(nodes: &[usize], limit: usize) -> String {
    let Some(first) = nodes.first() else {
        return String::new();
    };

    let mut parts: Vec<String> = if nodes.len() > limit && limit >= 2 {
        let head = limit / 2;
        let tail = limit - head;
        let mut parts: Vec<String> = nodes[..head].iter().map(ToString::to_string).collect();
        parts.push(format!("… {} more …", nodes.len() - limit));
        parts.extend(nodes[nodes.len() - tail..].iter().map(ToString::to_string));
        parts
    } else {
        nodes.iter().map(ToString::to_string).collect()
    };
    parts.push(first.to_string());
    parts.join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("graph", 0), "graphs");
        assert_eq!(pluralize("graph", 1), "graph");
        assert_eq!(pluralize("case", 5), "cases");
    }

    #[test]
    fn test_format_short_cycle() {
        assert_eq!(format_cycle(&[3, 1, 0, 2, 4], 12), "3 → 1 → 0 → 2 → 4 → 3");
        assert_eq!(format_cycle(&[7], 12), "7 → 7");
        assert_eq!(format_cycle(&[], 12), "");
    }

    #[test]
    fn test_format_long_cycle() {
        let nodes: Vec<usize> = (0..9).collect();
        assert_eq!(format_cycle(&nodes, 4), "0 → 1 → … 5 more … → 7 → 8 → 0");
    }
}
