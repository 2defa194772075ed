//! Built-in configuration defaults
//!
//! These sit underneath every resolved configuration. Any key missing from
//! all loaded documents falls back to the value here.

use crate::value::{Mapping, Value};
use site_fs::SiteFile;

pub const DEFAULT_MODE: &str = "production";
pub const DEFAULT_CONTENT_ROOT: &str = "content";
pub const DEFAULT_DEPLOY_ROOT: &str = "deploy";
pub const DEFAULT_MEDIA_ROOT: &str = "media";
pub const DEFAULT_LAYOUT_ROOT: &str = "layout";
pub const DEFAULT_MEDIA_URL: &str = "/media";
pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_NOT_FOUND: &str = "404.html";

/// Backup files and VCS metadata skipped when walking content.
pub const DEFAULT_IGNORE: [&str; 5] = ["*~", "*.bak", ".hg", ".git", ".svn"];

/// The default settings mapping.
pub fn defaults() -> Mapping {
    let mut conf = Mapping::new();
    conf.insert("mode".into(), DEFAULT_MODE.into());
    conf.insert("simple_copy".into(), Value::Sequence(Vec::new()));
    conf.insert("content_root".into(), DEFAULT_CONTENT_ROOT.into());
    conf.insert("deploy_root".into(), DEFAULT_DEPLOY_ROOT.into());
    conf.insert("media_root".into(), DEFAULT_MEDIA_ROOT.into());
    conf.insert("layout_root".into(), DEFAULT_LAYOUT_ROOT.into());
    conf.insert("media_url".into(), DEFAULT_MEDIA_URL.into());
    conf.insert("base_url".into(), DEFAULT_BASE_URL.into());
    conf.insert("encode_safe".into(), Value::Null);
    conf.insert("not_found".into(), DEFAULT_NOT_FOUND.into());
    conf.insert("plugins".into(), Value::Sequence(Vec::new()));
    conf.insert("ignore".into(), DEFAULT_IGNORE.to_vec().into());
    conf.insert(
        "meta".into(),
        [("nodemeta", SiteFile::NodeMeta.as_str())]
            .into_iter()
            .collect(),
    );
    conf
}
