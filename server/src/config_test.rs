use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn empty_environment_keeps_leptos_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn reads_port_and_site_dir() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("SITE_DIR", "/srv/huellitas/site")])).unwrap();
    assert_eq!(cfg.port, Some(8080));
    assert_eq!(cfg.site_dir, Some(PathBuf::from("/srv/huellitas/site")));
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_DIR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(err.to_string().contains("70000"));
}
