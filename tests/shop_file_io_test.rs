use anyhow::Result;
use clock_shop::{Clock, ClockError, ClockShop, LINE_SEPARATOR};
use std::error::Error as _;
use tempfile::TempDir;

fn clock(h: i32, m: i32, s: i32) -> Clock {
    Clock::new(h, m, s).unwrap()
}

#[test]
fn test_write_then_fill_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("clocks.txt");

    let mut shop = ClockShop::new();
    for (h, m, s) in [(12, 0, 0), (1, 30, 0), (23, 59, 59), (1, 30, 0), (0, 0, 0)] {
        shop.add(clock(h, m, s));
    }
    shop.write_to_file(&path)?;

    let mut reloaded = ClockShop::new();
    let added = reloaded.fill_from_file(&path)?;

    assert_eq!(added, 5);
    assert_eq!(reloaded, shop);
    for i in 0..shop.len() {
        assert!(reloaded.get(i)?.equals(shop.get(i)?));
    }
    Ok(())
}

#[test]
fn test_written_file_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("out.txt");

    let shop: ClockShop = [clock(1, 1, 1), clock(23, 5, 0)].into_iter().collect();
    shop.write_to_file(&path)?;

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content, format!("1:1:1{0}23:5:0{0}", LINE_SEPARATOR));
    assert_eq!(content, shop.to_string());
    Ok(())
}

#[test]
fn test_write_truncates_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("out.txt");
    std::fs::write(&path, "old content that is much longer than the new one\n")?;

    let shop: ClockShop = [clock(2, 2, 2)].into_iter().collect();
    shop.write_to_file(&path)?;

    assert_eq!(
        std::fs::read_to_string(&path)?,
        format!("2:2:2{}", LINE_SEPARATOR)
    );
    Ok(())
}

#[test]
fn test_empty_shop_writes_empty_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.txt");

    ClockShop::new().write_to_file(&path)?;
    assert_eq!(std::fs::read_to_string(&path)?, "");

    let mut reloaded = ClockShop::new();
    assert_eq!(reloaded.fill_from_file(&path)?, 0);
    assert!(reloaded.is_empty());
    Ok(())
}

#[test]
fn test_fill_from_missing_file_is_file_access() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.txt");

    let mut shop = ClockShop::new();
    let err = shop.fill_from_file(&path).unwrap_err();

    match &err {
        ClockError::FileAccess { message, .. } => assert_eq!(message, "File not found"),
        other => panic!("expected FileAccess, got {:?}", other),
    }
    assert!(err.source().is_some());
    assert!(shop.is_empty());
}

#[test]
fn test_write_into_missing_directory_is_file_access() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("out.txt");

    let shop: ClockShop = [clock(1, 2, 3)].into_iter().collect();
    let err = shop.write_to_file(&path).unwrap_err();

    match err {
        ClockError::FileAccess { message, .. } => {
            assert_eq!(message, "Error writing to the file")
        }
        other => panic!("expected FileAccess, got {:?}", other),
    }
}

#[test]
fn test_fill_from_windows_line_endings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("crlf.txt");
    std::fs::write(&path, "10:20:30\r\n0:0:0\r\n23:59:59\r\n")?;

    let mut shop = ClockShop::new();
    shop.fill_from_file(&path)?;

    assert_eq!(
        shop.as_slice(),
        &[clock(10, 20, 30), clock(0, 0, 0), clock(23, 59, 59)]
    );
    Ok(())
}

#[test]
fn test_fill_invalid_clock_aborts_but_keeps_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.txt");
    std::fs::write(&path, "1:0:0\n2:60:0\n3:0:0\n")?;

    let mut shop = ClockShop::new();
    let result = shop.fill_from_file(&path);

    assert!(matches!(result, Err(ClockError::InvalidArgument { .. })));
    assert_eq!(shop.as_slice(), &[clock(1, 0, 0)]);
    Ok(())
}

#[test]
fn test_load_sort_find_save() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("sorted.txt");
    std::fs::write(&input, "12:0:0\n1:30:0\n23:59:59\n")?;

    let mut shop = ClockShop::new();
    shop.fill_from_file(&input)?;
    shop.sort();

    assert_eq!(shop.find(&clock(1, 30, 0)), Some(0));
    assert_eq!(shop.find(&clock(12, 0, 0)), Some(1));
    assert_eq!(shop.find(&clock(6, 0, 0)), None);

    shop.write_to_file(&output)?;
    assert_eq!(
        std::fs::read_to_string(&output)?,
        format!("1:30:0{0}12:0:0{0}23:59:59{0}", LINE_SEPARATOR)
    );
    Ok(())
}
