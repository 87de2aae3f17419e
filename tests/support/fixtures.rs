//! Test fixtures and constants.
//!
//! Every token below was sealed under [`GOOD_KEY`].

/// Program name the library tests resolve keys for.
pub const PROGRAM: &str = "testapp";

/// Variable holding the key for [`PROGRAM`].
pub const KEY_VAR: &str = "KEYtestapp";

/// `A` + fourteen `a` + `A`.
pub const GOOD_KEY: &str = "QWFhYWFhYWFhYWFhYWFhQQ==";

/// `o` + fourteen `a` + `o`; well formed but not the sealing key.
pub const WRONG_KEY: &str = "b2FhYWFhYWFhYWFhYWFhbw==";

/// Not valid standard Base64 of sixteen bytes.
pub const BAD_KEY: &str = "WFhYWFhYWFhYWFhYWFhQQ==";

pub const TOKEN_ABC123: &str = "iVKgKeNMAPVGXU2XJP__yFHDMP0tj5kyRALAsgI0jXWfsg==";

pub const TOKEN_1: &str = "VsA2dNX5VkXVwqC-JMHQWCtUWNZ78OPz61OKbB4=";
pub const TOKEN_1_1: &str = "ZWuWGl8sOQ_gMFsz_l0IllFBmYemsNAennDesZ81ew==";
pub const TOKEN_ONE: &str = "ZfgUJkrHKNc3_1kOGq0441Guz7GIOs9FzxuQOHfaTg==";

pub const TOKEN_2: &str = "G1XjPYt9TUEEwoSXXNFnzpcDJTd_FqpNlBNFUPg=";
pub const TOKEN_2_2: &str = "O4F8tmdIqB9Rd1c_eaHVdmeO74XmP1Vvn37QcqHyTA==";
pub const TOKEN_TWO: &str = "xhGpyDq3QzaEE0mLfN7fv9Zylsl5Zk0Co7srhOe9GA==";

pub const TOKEN_5: &str = "-jOb83fMxevZJ5VwDRKrNu8NZdfV9wVYrSvzS3M=";
pub const TOKEN_5_5: &str = "CIgq4gXo_gew-86-Lpcla-6UcfvDpLCjy_FU6shTyw==";
pub const TOKEN_FIVE: &str = "brSSFJ8WHPoMbz0-5bNrNl0ixtK23wyyHrWEEy6QT6U=";

/// A second sealing of "1".
pub const TOKEN_1_ALT: &str = "afAlg7xxVE_9lyNZI5WqfRV0mqr0YTAElWo_Oiw=";

pub const TOKEN_FOOBAR: &str = "Q_mpS5vn_fl0cY3L44foaz-LJ3p5Qn9fCmmFWBH8xbHAnw==";

/// Config file setting i=2, f=2.2, s=Two.
pub fn sealed_twos() -> String {
    format!(
        "# sealed values\ni = {}\nf = {}\ns = {}\n",
        TOKEN_2, TOKEN_2_2, TOKEN_TWO
    )
}

/// Config file setting i=3, f=3.3, s=Three as literals.
pub const LITERAL_THREES: &str = "i = (3)\nf = (3.3)\ns = (Three)\n";

/// Config file with nothing but comments and blank lines.
pub const COMMENTS_ONLY: &str = "# nothing here\n\n   \n# still nothing\n";
