use std::path::{Path, PathBuf};

use ffshrink::engine::{OUTPUT_SUFFIX, derive_output_path};
use proptest::prelude::*;

proptest! {
    /// The derived name differs from the input's base name by exactly the
    /// suffix; the extension never changes.
    #[test]
    fn suffix_inserted_before_extension(
        stem in "[A-Za-z0-9][A-Za-z0-9 ._-]{0,24}[A-Za-z0-9]",
        ext in "[a-z0-9]{1,4}",
    ) {
        let input = PathBuf::from(format!("{stem}.{ext}"));
        let output = derive_output_path(&input);

        // Path::file_stem splits on the last dot, so recompute from that
        let input_stem = input.file_stem().unwrap().to_str().unwrap();
        let expected = format!("{input_stem}{OUTPUT_SUFFIX}.{ext}");
        prop_assert_eq!(output.file_name().unwrap().to_str().unwrap(), expected.as_str());
        prop_assert_eq!(output.extension(), input.extension());
    }

    #[test]
    fn output_stays_in_input_directory(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        stem in "[a-z0-9]{1,12}",
        ext in "[a-z0-9]{1,4}",
    ) {
        let input = PathBuf::from(format!("/{dir}/{stem}.{ext}"));
        let output = derive_output_path(&input);

        prop_assert_eq!(output.parent(), input.parent());
        prop_assert_ne!(&output, &input);
    }

    #[test]
    fn extensionless_inputs_get_bare_suffix(stem in "[a-z0-9]{1,16}") {
        let input = PathBuf::from(format!("/videos/{stem}"));
        let output = derive_output_path(&input);

        prop_assert_eq!(
            output,
            Path::new("/videos").join(format!("{stem}{OUTPUT_SUFFIX}"))
        );
    }
}
