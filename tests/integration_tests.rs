use favitems::{
    decode, decode_with_options, encode, escape, FavoriteEntry, FavoriteList, FavoritesOptions,
    FavoritesStore, QueryExecutor, Result, Row,
};
use std::collections::HashMap;

/// In-memory stand-in for the `users` table, narrowly parsing the two SQL
/// shapes the store issues.
#[derive(Default)]
struct MemoryDb {
    favitems: HashMap<String, Option<String>>,
    updates: Vec<String>,
}

impl MemoryDb {
    fn with_user(login: &str, favitems: &str) -> Self {
        let mut db = MemoryDb::default();
        db.favitems
            .insert(login.to_string(), Some(favitems.to_string()));
        db
    }

    fn stored(&self, login: &str) -> Option<&str> {
        self.favitems.get(login)?.as_deref()
    }
}

fn login_of(sql: &str) -> Option<&str> {
    let start = sql.find("login = '")? + "login = '".len();
    let rest = &sql[start..];
    Some(&rest[..rest.find('\'')?])
}

impl QueryExecutor for MemoryDb {
    fn execute_update(&mut self, sql: &str) -> Result<()> {
        self.updates.push(sql.to_string());
        if let Some(rest) = sql.strip_prefix("UPDATE users SET favitems = '") {
            if let Some(end) = rest.find("' WHERE") {
                let value = rest[..end].to_string();
                if let Some(login) = login_of(rest) {
                    self.favitems.insert(login.to_string(), Some(value));
                }
            }
        }
        Ok(())
    }

    fn execute_query(&mut self, sql: &str) -> Result<usize> {
        Ok(self.execute_query_rows(sql)?.len())
    }

    fn execute_query_rows(&mut self, sql: &str) -> Result<Vec<Row>> {
        match login_of(sql).and_then(|login| self.favitems.get(login)) {
            Some(value) => Ok(vec![vec![value.clone()]]),
            None => Ok(Vec::new()),
        }
    }
}

#[test]
fn test_decode_scenario() {
    let entries = decode("coffee,tea,muffin ");
    let texts: Vec<_> = entries.iter().map(FavoriteEntry::text).collect();
    assert_eq!(texts, ["coffee", "tea", "muffin "]);
    assert_eq!(entries[0].span(), 0..6);
    assert_eq!(entries[1].span(), 7..10);
    // The final entry's end is the trailing-marker index
    assert_eq!(entries[2].span(), 11..17);
}

#[test]
fn test_remove_scenario() {
    let mut list = FavoriteList::decode("coffee,tea,muffin ", FavoritesOptions::new());
    let removed_span = 1 + list.entries()[1].span().len();
    list.remove(1).unwrap();
    assert_eq!(list.raw(), "coffee,muffin ");
    assert_eq!(removed_span, 4);
    assert_eq!(list.entries()[1].span(), 7..13);
}

#[test]
fn test_add_to_empty_scenario() {
    let mut list = FavoriteList::decode(
        "",
        FavoritesOptions::new().with_legacy_trailing_entry(false),
    );
    list.add("cocoa");
    assert_eq!(list.raw(), "cocoa");
    assert_eq!(list.entries().to_vec(), vec![FavoriteEntry::new("cocoa", 0, 5)]);
}

#[test]
fn test_sanitizer_scenario() {
    // Documented narrow policy: semicolon stripped, bare apostrophe kept
    assert_eq!(escape("O'Brien;DROP TABLE x"), "O'BrienDROP TABLE x");
}

#[test]
fn test_menu_flow_unfavorite_then_favorite() {
    let mut store = FavoritesStore::new(MemoryDb::with_user("alice", "coffee,tea,muffin "));

    // Display pass: user sees a numbered list and picks 1 ("tea")
    let mut list = store.load("alice").unwrap();
    assert_eq!(list.len(), 3);
    store.remove("alice", &mut list, 1).unwrap();

    // Guided search pass: user favorites a new item
    let mut list = store.load("alice").unwrap();
    store.add("alice", &mut list, "cocoa").unwrap();

    let db = store.into_inner();
    assert_eq!(db.stored("alice"), Some("coffee,muffin,cocoa "));
    assert_eq!(db.updates.len(), 2);
}

#[test]
fn test_reload_after_each_mutation_sees_written_state() {
    let mut store = FavoritesStore::new(MemoryDb::with_user("bob", ""));

    let mut list = store.load("bob").unwrap();
    store.add("bob", &mut list, "espresso").unwrap();

    let list = store.load("bob").unwrap();
    let texts: Vec<_> = list.entries().iter().map(FavoriteEntry::trimmed).collect();
    assert_eq!(texts, ["espresso"]);
}

#[test]
fn test_empty_favorites_numbering_includes_spurious_entry() {
    // The legacy decode emits one empty entry for an empty value, and the
    // surrounding menu numbers it; removing it is a harmless no-op write
    let mut store = FavoritesStore::new(MemoryDb::with_user("carol", ""));
    let mut list = store.load("carol").unwrap();
    assert_eq!(list.len(), 1);
    store.remove("carol", &mut list, 0).unwrap();
    assert_eq!(store.into_inner().stored("carol"), Some(""));
}

#[test]
fn test_cancel_index_is_len_everywhere() {
    let mut store = FavoritesStore::new(MemoryDb::with_user("dave", "coffee,tea "));
    let mut list = store.load("dave").unwrap();
    let cancel = list.len();
    store.remove("dave", &mut list, cancel).unwrap();
    assert!(store.into_inner().updates.is_empty());
}

#[test]
fn test_capacity_cap_applies_end_to_end() {
    let mut store = FavoritesStore::with_options(
        MemoryDb::with_user("erin", ""),
        FavoritesOptions::new()
            .with_max_len(16)
            .with_legacy_trailing_entry(false),
    );
    let mut list = store.load("erin").unwrap();
    assert!(!store.add("erin", &mut list, "cortado").unwrap());
    assert!(store.add("erin", &mut list, "affogato bianco").unwrap());

    let stored = store.into_inner();
    let raw = stored.stored("erin").unwrap();
    assert!(raw.chars().count() <= 16);
    assert_eq!(raw, "cortado,affogato");
}

#[test]
fn test_quoted_login_does_not_round_trip() {
    // The narrow policy leaves a bare quote in place, so the issued SQL
    // reads `login = 'o'brien'` and the literal ends at the inner quote.
    // The lookup misses the stored row and the load yields the empty value.
    let mut store = FavoritesStore::new(MemoryDb::with_user("o'brien", "coffee "));
    let list = store.load("o'brien").unwrap();
    assert_eq!(list.raw(), "");
    assert_eq!(list.entries()[0].text(), "");
}

#[test]
fn test_encode_is_decode_inverse_for_display() {
    let raw = "coffee,tea,muffin ";
    let entries = decode(raw);
    assert_eq!(encode(&entries), raw);

    let options = FavoritesOptions::new().with_legacy_trailing_entry(false);
    assert_eq!(encode(&decode_with_options("", &options)), "");
}
