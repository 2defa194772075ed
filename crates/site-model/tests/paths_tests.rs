//! Derived site paths

use rstest::rstest;
use site_fs::NormalizedPath;
use site_model::config::SiteConfig;
use site_test_utils::TestSite;

#[test]
fn media_root_nests_under_content_root() {
    let site = TestSite::new();
    site.write("site.yaml", "content_root: content\nmedia_root: media");
    site.mkdir("content/media");
    site.mkdir("media");

    let config = SiteConfig::load(site.root()).unwrap();

    let expected = NormalizedPath::new(site.root()).expanded().join("content/media");
    assert_eq!(config.media_root_path(), expected);
    assert_ne!(
        config.media_root_path(),
        NormalizedPath::new(site.root()).expanded().join("media")
    );
}

#[rstest]
#[case("deploy_root: public", "public")]
#[case("deploy_root: out/site", "out/site")]
#[case("deploy_root: ./build/../dist", "dist")]
fn deploy_root_resolves_under_site_root(#[case] document: &str, #[case] relative: &str) {
    let site = TestSite::new();
    site.write("site.yaml", document);
    site.mkdir(relative);

    let config = SiteConfig::load(site.root()).unwrap();

    let expected = NormalizedPath::new(site.root()).expanded().join(relative);
    assert_eq!(config.deploy_root_path(), expected);
}

#[test]
fn default_roots() {
    let site = TestSite::new();
    for dir in ["content/media", "layout", "deploy"] {
        site.mkdir(dir);
    }
    let config = SiteConfig::load(site.root()).unwrap();
    let root = NormalizedPath::new(site.root()).expanded();

    assert_eq!(config.content_root_path(), root.join("content"));
    assert_eq!(config.layout_root_path(), root.join("layout"));
    assert_eq!(config.deploy_root_path(), root.join("deploy"));
    assert_eq!(config.media_root_path(), root.join("content/media"));
}

#[test]
fn absolute_roots_are_kept() {
    let site = TestSite::new();
    let elsewhere = TestSite::new();
    let target = NormalizedPath::new(elsewhere.root()).expanded();
    site.write("site.yaml", &format!("layout_root: {}", target));

    let config = SiteConfig::load(site.root()).unwrap();

    assert_eq!(config.layout_root_path(), target);
}
