//! # App Path Resolver
//!
//! Static library defaults for data directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for data directory environment variables.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the data directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// ## Project Dirs Behavior
    ///
    /// |Platform | Value                                                                      |
    /// | ------- | -------------------------------------------------------------------------- |
    /// | Linux   | `$XDG_DATA_HOME`/`_project_path_` or `$HOME`/.local/share/`_project_path_` |
    /// | macOS   | `$HOME`/Library/Application Support/`_project_path_`                       |
    /// | Windows | `{FOLDERID_LocalAppData}`\\`_project_path_`\\data                          |
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.data_env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs().map(|pds| pds.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const DATA_ENV1: &str = "_WORDVOCAB_TEST_DATA_ENV1";
    const DATA_ENV2: &str = "_WORDVOCAB_TEST_DATA_ENV2";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        data_env_vars: &[DATA_ENV1, DATA_ENV2],
    };

    #[test]
    #[serial]
    fn test_resolve_data_dir() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;
        let user_dir = PathBuf::from("/tmp/wordvocab/data");
        let env_dir1 = PathBuf::from("/tmp/wordvocab/env_data.1");
        let env_dir2 = PathBuf::from("/tmp/wordvocab/env_data.2");

        unsafe {
            for v in TEST_CONFIG.data_env_vars {
                env::remove_var(v);
            }
        }

        assert_eq!(
            TEST_CONFIG.resolve_data_dir(Some(user_dir.clone())),
            Some(user_dir.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(pds.data_dir().to_path_buf())
        );

        // Lowest priority var.
        unsafe {
            env::set_var(DATA_ENV2, env_dir2.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(Some(user_dir.clone())),
            Some(user_dir.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_dir2.clone())
        );

        // Higher priority var.
        unsafe {
            env::set_var(DATA_ENV1, env_dir1.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_dir1.clone())
        );

        unsafe {
            for v in TEST_CONFIG.data_env_vars {
                env::remove_var(v);
            }
        }
    }
}
