//! Build identification, in the `<patchlevel>+<commit>.<tag>…` layout used
//! by Tcl's `build-info`.

use std::fmt;

pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit id baked in at compile time through `UCDNORM_COMMIT`.
pub const COMMIT: &str = match option_env!("UCDNORM_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

pub const COMPILER: &str = "rustc";

/// Result of a `build-info` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildInfoValue {
    Text(String),
    Present(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub patchlevel: &'static str,
    pub commit: &'static str,
    pub compiler: &'static str,
    pub tags: Vec<&'static str>,
}

impl BuildInfo {
    /// Description of the running binary.
    pub fn current() -> Self {
        let mut tags = Vec::new();
        if cfg!(debug_assertions) {
            tags.push("debug");
            tags.push("no-optimize");
        }
        if cfg!(feature = "simd") {
            tags.push("simd");
        }
        Self {
            patchlevel: PACKAGE_VERSION,
            commit: COMMIT,
            compiler: COMPILER,
            tags,
        }
    }

    /// `major.minor` part of the patchlevel.
    pub fn version(&self) -> &'static str {
        let mut dots = self.patchlevel.match_indices('.').map(|(idx, _)| idx);
        match (dots.next(), dots.next()) {
            (Some(_), Some(second)) => &self.patchlevel[..second],
            _ => self.patchlevel,
        }
    }

    /// `patchlevel`, `version`, `commit` and `compiler` return their value;
    /// any other word reports whether it is one of the build tags.
    pub fn query(&self, option: &str) -> BuildInfoValue {
        match option {
            "patchlevel" => BuildInfoValue::Text(self.patchlevel.to_owned()),
            "version" => BuildInfoValue::Text(self.version().to_owned()),
            "commit" => BuildInfoValue::Text(self.commit.to_owned()),
            "compiler" => BuildInfoValue::Text(self.compiler.to_owned()),
            tag => BuildInfoValue::Present(self.compiler == tag || self.tags.contains(&tag)),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.patchlevel, self.commit, self.compiler)?;
        for tag in &self.tags {
            write!(f, ".{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildInfo {
        BuildInfo {
            patchlevel: "1.4.2",
            commit: "0123abc",
            compiler: "rustc",
            tags: vec!["debug", "simd"],
        }
    }

    #[test]
    fn build_string_layout() {
        assert_eq!(sample().to_string(), "1.4.2+0123abc.rustc.debug.simd");
    }

    #[test]
    fn queries() {
        let info = sample();
        assert_eq!(info.query("patchlevel"), BuildInfoValue::Text("1.4.2".into()));
        assert_eq!(info.query("version"), BuildInfoValue::Text("1.4".into()));
        assert_eq!(info.query("commit"), BuildInfoValue::Text("0123abc".into()));
        assert_eq!(info.query("compiler"), BuildInfoValue::Text("rustc".into()));
        assert_eq!(info.query("debug"), BuildInfoValue::Present(true));
        assert_eq!(info.query("rustc"), BuildInfoValue::Present(true));
        assert_eq!(info.query("static"), BuildInfoValue::Present(false));
    }

    #[test]
    fn current_build() {
        let info = BuildInfo::current();
        assert_eq!(info.patchlevel, PACKAGE_VERSION);
        assert!(info.to_string().starts_with(&format!("{PACKAGE_VERSION}+")));
        assert_eq!(
            info.query("debug"),
            BuildInfoValue::Present(cfg!(debug_assertions))
        );
    }
}
