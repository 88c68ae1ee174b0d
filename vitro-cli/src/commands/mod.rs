//! Command implementations

pub mod dev;
pub mod generate;
pub mod init;
pub mod nav;
pub mod process;
pub mod tree;

use vitro_config::PackageManager;

use crate::cli::PackageManagerArg;

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
        }
    }
}
