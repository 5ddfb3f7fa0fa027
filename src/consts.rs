/// File name of the generated module, relative to the front-end `src/` directory
pub(crate) const BUILD_TIME_FILE: &str = "build-time.ts";

/// Name of the exported constant inside the generated module
pub(crate) const BUILD_TIME_CONST: &str = "BUILD_TIME";

/// Config file name looked up in the working directory and under the user config dir
pub(crate) const CONFIG_FILE: &str = "buildstamp.toml";
