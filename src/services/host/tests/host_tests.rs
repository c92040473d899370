use super::*;
use crate::types::errors::PackError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_association_commands_layout() {
    let commands = association_commands(Path::new(r"C:\YMM\unpack.exe"), "ymmpx");

    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[0],
        vec!["add", r"HKCR\.ymmpx", "/ve", "/d", "YMMResourcePackagerFile", "/f"]
    );
    assert_eq!(commands[1][1], r"HKCR\YMMResourcePackagerFile");
    assert_eq!(commands[1][4], "YMM Resource Packager File");
    assert_eq!(
        commands[2][1],
        r"HKCR\YMMResourcePackagerFile\shell\open\command"
    );
    assert_eq!(commands[2][4], r#""C:\YMM\unpack.exe" "%1""#);
}

#[cfg(not(windows))]
#[test]
fn test_register_association_unsupported_off_windows() {
    let result = register_association(Path::new("/opt/unpack"), "ymmpx");
    assert!(matches!(result, Err(PackError::Io(msg)) if msg.contains("Windows")));
}

#[test]
fn test_missing_host_is_reported() {
    let tmp = TempDir::new().unwrap();
    let host = tmp.path().join("YukkuriMovieMaker.exe");

    let err = launch_host(&host, &tmp.path().join("project.ymmp")).unwrap_err();
    assert!(err.to_string().contains("Host executable not found"));
    assert!(ensure_host_available(&host).is_err());
}

#[cfg(unix)]
#[test]
fn test_launch_host_spawns_process() {
    let host = Path::new("/bin/true");
    if !host.exists() {
        return;
    }
    assert!(launch_host(host, Path::new("/tmp/project.ymmp")).is_ok());
}
