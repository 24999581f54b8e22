/// Constants used throughout the minicache codebase
// External tool
pub const DEFAULT_TOOL: &str = "minikube";
pub const VERSION_ARGS: [&str; 2] = ["version", "--short"];

// Local layout
pub const DEFAULT_CACHE_ROOT: &str = ".minikube/cache";
pub const DEFAULT_STATE_FILE: &str = ".minikube/cache-hits.json";
pub const STORE_DIR_NAME: &str = "minicache";

// Preload key defaults
pub const DEFAULT_KUBERNETES_VERSION: &str = "stable";
pub const DEFAULT_CONTAINER_RUNTIME: &str = "docker";

// Action inputs, as exposed by the CI runner
pub const INPUT_KUBERNETES_VERSION_VAR: &str = "INPUT_KUBERNETES-VERSION";
pub const INPUT_CONTAINER_RUNTIME_VAR: &str = "INPUT_CONTAINER-RUNTIME";

// Environment variable names
pub const MINICACHE_CACHE_ROOT_VAR: &str = "MINICACHE_CACHE_ROOT";
pub const MINICACHE_TOOL_VAR: &str = "MINICACHE_TOOL";
pub const MINICACHE_STATE_FILE_VAR: &str = "MINICACHE_STATE_FILE";
pub const MINICACHE_STORE_DIR_VAR: &str = "MINICACHE_STORE_DIR";
pub const MINICACHE_LOG_VAR: &str = "MINICACHE_LOG";
