use orgchart_core::{Error, RoleList};

#[test]
fn role_list_trims_and_rejects_duplicates() {
    let mut roles = RoleList::new();
    assert_eq!(roles.add("  部長 "), Ok(0));
    assert_eq!(roles.add("課長"), Ok(1));
    assert_eq!(roles.add(""), Err(Error::EmptyRole));
    assert_eq!(roles.add("   "), Err(Error::EmptyRole));
    assert_eq!(
        roles.add("部長"),
        Err(Error::DuplicateRole {
            role: "部長".to_string()
        })
    );
    assert_eq!(roles.as_slice(), ["部長", "課長"]);
    assert_eq!(roles.iter().collect::<Vec<_>>(), vec!["部長", "課長"]);
    assert_eq!(roles.len(), 2);
    assert!(!roles.is_empty());
    assert!(RoleList::new().is_empty());
}

#[test]
fn role_list_moves_stop_at_the_ends() {
    let mut roles: RoleList = ["a", "b", "c"].into_iter().collect();
    assert!(!roles.move_up(0));
    assert!(!roles.move_down(2));
    assert!(!roles.move_up(9));
    assert!(roles.move_up(2));
    assert_eq!(roles.as_slice(), ["a", "c", "b"]);
    assert!(roles.move_down(0));
    assert_eq!(roles.as_slice(), ["c", "a", "b"]);

    assert_eq!(roles.remove(1), Some("a".to_string()));
    assert_eq!(roles.remove(5), None);
    assert!(roles.contains("b"));
    assert!(!roles.contains("a"));
}

#[test]
fn role_list_deserialization_drops_blanks_and_duplicates() {
    let roles: RoleList = serde_json::from_str(r#"["部長", " ", "部長", "主任"]"#).unwrap();
    assert_eq!(roles.as_slice(), ["部長", "主任"]);
}
