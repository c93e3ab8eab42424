//! List every calendar known to the store.

use crate::store::CalendarStore;
use calbridge_core::calendar::rgb_hex;
use calbridge_core::{BridgeResult, Calendar};

pub fn handle(store: &dyn CalendarStore) -> BridgeResult<Vec<Calendar>> {
    let calendars = store
        .calendars()?
        .into_iter()
        .map(|row| Calendar {
            id: row.id.to_string(),
            title: row.name,
            color: Some(rgb_hex(row.color)),
        })
        .collect();

    Ok(calendars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::CalendarRow;

    #[test]
    fn test_rows_become_id_title_color_triples() {
        let mut store = MemoryStore::new();
        store.calendars = vec![
            CalendarRow {
                id: 1,
                name: "Work".to_string(),
                color: 0xFF112233u32 as i64,
                ..Default::default()
            },
            CalendarRow {
                id: 2,
                name: "Home".to_string(),
                color: 0,
                ..Default::default()
            },
        ];

        let calendars = handle(&store).unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0].id, "1");
        assert_eq!(calendars[0].title, "Work");
        // Alpha byte is stripped from the stored color
        assert_eq!(calendars[0].color.as_deref(), Some("#112233"));
        assert_eq!(calendars[1].color.as_deref(), Some("#000000"));
    }
}
