// ============================================================
// Layer 4 — Patient ID Extractor
// ============================================================
// Derives the patient grouping key from a sample identifier.
//
// Image filenames in this dataset start with the patient's
// numeric ID followed by an underscore:
//
//   6375522_20_R_FLOOR-3_0000.png
//   ───┬───
//      └── patient key "6375522"
//
// Only the final path component is inspected, so
// "/data/raw/6375522_20_R_FLOOR-3_0000.png" gives the same key.
//
// Identifiers without a "<digits>_" prefix are not an error:
// the whole file name becomes its own group, so that sample is
// only grouped with exact duplicates of itself.
//
// The prefix is recognised by a small hand-written tokenizer
// (leading_digit_run) instead of a regex, so the accepted
// grammar is exactly: ASCII digits, at least one, then '_'.

/// Return the final component of a `/` or `\` separated path.
///
/// A trailing separator yields an empty string, matching the
/// usual `basename` behaviour.
pub fn final_path_component(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Return the leading run of ASCII digits if it is immediately
/// followed by an underscore.
///
/// ```text
/// "6375522_20_R.png" → Some("6375522")
/// "6375522.png"      → None   (no underscore after the digits)
/// "_12_a.png"        → None   (empty digit run)
/// "a12_b.png"        → None   (does not start with a digit)
/// ```
pub fn leading_digit_run(name: &str) -> Option<&str> {
    let digits = name
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits > 0 && name.as_bytes().get(digits) == Some(&b'_') {
        Some(&name[..digits])
    } else {
        None
    }
}

/// Extract the patient key from a sample identifier.
///
/// Never fails: without a digit prefix the file name itself is
/// returned as the key.
pub fn extract_patient_id(filename: &str) -> String {
    let name = final_path_component(filename);
    leading_digit_run(name).unwrap_or(name).to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_prefix_is_extracted() {
        assert_eq!(extract_patient_id("6375522_20_R_FLOOR-3_0000.png"), "6375522");
        assert_eq!(extract_patient_id("1_a"), "1");
        assert_eq!(extract_patient_id("007_scan"), "007");
    }

    #[test]
    fn test_directory_components_are_ignored() {
        assert_eq!(extract_patient_id("/a/b/6375522_20_R_FLOOR-3_0000.png"), "6375522");
        assert_eq!(extract_patient_id("C:\\images\\42_left.png"), "42");
        assert_eq!(extract_patient_id("nested/dir/no_prefix.png"), "no_prefix.png");
    }

    #[test]
    fn test_missing_prefix_falls_back_to_file_name() {
        assert_eq!(extract_patient_id("no_digits_here.png"), "no_digits_here.png");
        assert_eq!(extract_patient_id("6375522.png"), "6375522.png");
        assert_eq!(extract_patient_id("_123_a.png"), "_123_a.png");
        assert_eq!(extract_patient_id("12a_b.png"), "12a_b.png");
        assert_eq!(extract_patient_id(""), "");
    }

    #[test]
    fn test_only_ascii_digits_count() {
        // Arabic-Indic digits are numeric but not part of the key grammar
        assert_eq!(leading_digit_run("١٢_a"), None);
        assert_eq!(extract_patient_id("١٢_a"), "١٢_a");
    }

    #[test]
    fn test_leading_digit_run() {
        assert_eq!(leading_digit_run("123_x"), Some("123"));
        assert_eq!(leading_digit_run("123"), None);
        assert_eq!(leading_digit_run("123-x"), None);
        assert_eq!(leading_digit_run("_x"), None);
        assert_eq!(leading_digit_run(""), None);
    }

    #[test]
    fn test_final_path_component() {
        assert_eq!(final_path_component("a/b/c.png"), "c.png");
        assert_eq!(final_path_component("c.png"), "c.png");
        assert_eq!(final_path_component("a/b/"), "");
        assert_eq!(final_path_component("a\\b\\c.png"), "c.png");
    }
}
