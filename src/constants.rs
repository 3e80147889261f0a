// src/constants.rs

/// The name of the optional settings file at the project root.
pub const SETTINGS_FILENAME: &str = "timings.toml";

/// The cargo executable driven for both the clean and the build phase.
pub const CARGO_PROGRAM: &str = "cargo";

/// The toolchain channel used when `timings.toml` does not name one.
/// The timings instrumentation is only available on nightly.
pub const DEFAULT_TOOLCHAIN: &str = "nightly";

/// The unstable flag that makes cargo print one JSON timing record per target.
pub const TIMINGS_FLAG: &str = "-Z timings=json";

/// The base of the generated file name, before configuration markers.
pub const DEFAULT_BASE_NAME: &str = "timings";

/// The directory (relative to the project root) the chart is written into.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// The prefix of every generated chart file.
pub const OUTPUT_PREFIX: &str = "timings";

/// The extension of every generated chart file.
pub const OUTPUT_EXTENSION: &str = "svg";

/// Marker appended to the name when default features are disabled.
pub const NO_DEFAULT_MARKER: &str = "_nodefault";

/// Marker prepended to the literal feature string in the name.
pub const FEATURES_MARKER: &str = "_features=";

/// The title drawn above the chart.
pub const DEFAULT_TITLE: &str = "Build Timings";

/// The presentation order used when `timings.toml` does not give one.
pub const DEFAULT_ORDER: &[&[&str]] = &[&["minimal-lexical"]];

/// Default color of the total-duration segment.
pub const DEFAULT_TOTAL_COLOR: &str = "lightskyblue";

/// Default color of the metadata segment.
pub const DEFAULT_METADATA_COLOR: &str = "darkorchid";
