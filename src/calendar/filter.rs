use crate::models::EventWithJoins;

/// Keep only events of one category, or every event when no category is selected.
///
/// Relative order is preserved. Filtering the result again with the same
/// selector returns it unchanged.
pub fn filter_by_category<'a, I>(events: I, category_id: Option<&str>) -> Vec<&'a EventWithJoins>
where
    I: IntoIterator<Item = &'a EventWithJoins>,
{
    match category_id {
        None => events.into_iter().collect(),
        Some(id) => events
            .into_iter()
            .filter(|event| event.category_id() == id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    fn event(id: &str, category_id: &str) -> EventWithJoins {
        EventWithJoins::new(Event::new(id, id, "2026-05-01", category_id), None, None)
    }

    #[test]
    fn test_no_selector_keeps_everything_in_order() {
        let events = vec![event("e1", "a"), event("e2", "b"), event("e3", "a")];
        let filtered = filter_by_category(&events, None);
        let ids: Vec<&str> = filtered.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_selector_keeps_matching_in_order() {
        let events = vec![event("e1", "a"), event("e2", "b"), event("e3", "a")];
        let filtered = filter_by_category(&events, Some("a"));
        let ids: Vec<&str> = filtered.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["e1", "e3"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = vec![event("e1", "a"), event("e2", "b"), event("e3", "a")];
        let once = filter_by_category(&events, Some("a"));
        let twice = filter_by_category(once.iter().copied(), Some("a"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let events = vec![event("e1", "a")];
        assert!(filter_by_category(&events, Some("zzz")).is_empty());
        let empty: Vec<EventWithJoins> = Vec::new();
        assert!(filter_by_category(&empty, Some("a")).is_empty());
    }
}
