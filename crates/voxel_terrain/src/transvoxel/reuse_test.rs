use super::*;

#[test]
fn test_regular_cache_starts_empty() {
  let cache = RegularReuseCache::new(4);
  for slot in 0..REGULAR_REUSE_SLOTS {
    assert_eq!(cache.get([0, 0, 0], slot), None);
    assert_eq!(cache.get([-1, -1, -1], slot), None);
    assert_eq!(cache.get([3, 3, 3], slot), None);
  }
}

#[test]
fn test_regular_cache_set_get() {
  let mut cache = RegularReuseCache::new(4);
  cache.set([1, 2, 3], 2, 17);
  cache.set([-1, 0, 0], 0, 4);

  assert_eq!(cache.get([1, 2, 3], 2), Some(17));
  assert_eq!(cache.get([1, 2, 3], 1), None);
  assert_eq!(cache.get([-1, 0, 0], 0), Some(4));
  assert_eq!(cache.get([0, 0, 0], 0), None);
}

#[test]
fn test_transition_deck_set_get() {
  let mut deck = TransitionReuseDeck::new(8);
  deck.set(-1, 7, 14, 99);
  deck.set(3, -1, 0, 1);

  assert_eq!(deck.get(-1, 7, 14), Some(99));
  assert_eq!(deck.get(3, -1, 0), Some(1));
  assert_eq!(deck.get(3, -1, 1), None);
  assert_eq!(deck.get(0, 0, 14), None);
}

#[test]
fn test_owner_cell_steps_back() {
  assert_eq!(owner_cell([2, 2, 2], crate::tables::OWNER_SELF), [2, 2, 2]);
  assert_eq!(owner_cell([2, 2, 2], 1), [1, 2, 2]);
  assert_eq!(owner_cell([2, 2, 2], 6), [2, 1, 1]);
  assert_eq!(owner_cell([0, 0, 0], 7), [-1, -1, -1]);
}
