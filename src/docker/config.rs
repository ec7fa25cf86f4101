//! Container build constants.

/// Image tag for the containerized publish build
pub const BUILD_IMAGE_NAME: &str = "avant-open-cloud-build";

/// Build descriptor used on the one supported containerized host
pub const LINUX_DOCKERFILE: &str = "Dockerfile.linux";

/// Build output path inside the image
pub const CONTAINER_BIN_DIR: &str = "/build/bin/.";

/// Mount point inside the container receiving the published binaries
pub const CONTAINER_PUBLISH_DIR: &str = "/publish";
