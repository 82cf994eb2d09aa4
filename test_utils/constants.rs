pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_SYMBOLS_CSV_PATH: &str = "tests/test_data_files/test_symbols.csv";
