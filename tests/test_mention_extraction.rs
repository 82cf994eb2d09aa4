use std::fs::{read_dir, read_to_string};
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{get_expected_mentions, load_test_validator, strip_directives};
use ticker_mentions::extract_ticker_mentions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mentions_from_multiple_files() {
        println!("Testing mention extractions...");

        let validator = load_test_validator();

        // Read all files in the directory
        let files = read_dir(TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        let total_files = files.len();
        assert!(total_files > 0, "No test files found");

        for (file_idx, file) in files.iter().enumerate() {
            let file_path = file.path();

            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            if !file_path.is_file() {
                continue;
            }

            let raw_text = read_to_string(&file_path).expect("Failed to read test file");
            let text = strip_directives(&raw_text);

            let expected = get_expected_mentions(&file_path);
            let actual =
                extract_ticker_mentions(&text, &validator).expect("Failed to extract mentions");

            assert_eq!(actual, expected, "Mismatch in {:?}", file_path);
        }
    }
}
