use bevy::prelude::*;

/// Taste categories; sum of ingredient values mod 3 picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taste {
  Tasty,
  Spicy,
  Salty,
}

impl Taste {
  pub fn label(self) -> &'static str {
    match self {
      Taste::Tasty => "tasty",
      Taste::Spicy => "spicy",
      Taste::Salty => "salty",
    }
  }
}

/// Pure evaluation: taste is a function of the submitted values only.
pub fn taste_of(values: impl IntoIterator<Item = u8>) -> Taste {
  let total: u32 = values.into_iter().map(u32::from).sum();
  match total % 3 {
    0 => Taste::Tasty,
    1 => Taste::Spicy,
    _ => Taste::Salty,
  }
}

/// One submitted ingredient, in submission order.
#[derive(Debug, Clone)]
pub struct IngredientSlot {
  pub value: u8,
  pub sprite: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
  /// At capacity; nothing was mutated, the caller keeps the item.
  Full,
  Accepted,
  /// The submission filled the last slot: the dish was evaluated and the
  /// kitchen reset, atomically within `submit`.
  Cooked {
    taste: Taste,
    consumed: Vec<IngredientSlot>,
  },
}

impl SubmitOutcome {
  pub fn accepted(&self) -> bool {
    !matches!(self, SubmitOutcome::Full)
  }
}

/// Bounded ingredient container. Count never exceeds `capacity`; filling the
/// last slot cooks and clears before `submit` returns.
#[derive(Component, Debug)]
pub struct Kitchen {
  pub capacity: usize,
  ingredients: Vec<IngredientSlot>,
}

impl Kitchen {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      ingredients: Vec::with_capacity(capacity),
    }
  }

  pub fn count(&self) -> usize {
    self.ingredients.len()
  }

  pub fn submit(&mut self, slot: IngredientSlot) -> SubmitOutcome {
    if self.ingredients.len() >= self.capacity {
      return SubmitOutcome::Full;
    }
    self.ingredients.push(slot);
    if self.ingredients.len() == self.capacity {
      let consumed = std::mem::take(&mut self.ingredients);
      let taste = taste_of(consumed.iter().map(|s| s.value));
      SubmitOutcome::Cooked { taste, consumed }
    } else {
      SubmitOutcome::Accepted
    }
  }

  /// Ordered sprite-or-empty slot states for the display collaborator,
  /// always `capacity` entries long.
  pub fn slot_states(&self) -> Vec<Option<String>> {
    (0..self.capacity)
      .map(|i| self.ingredients.get(i).map(|s| s.sprite.clone()))
      .collect()
  }
}

/// Display boundary: the ordered slot states after any change.
#[derive(Message, Debug, Clone)]
pub struct KitchenSlotsChanged {
  pub kitchen: Entity,
  pub slots: Vec<Option<String>>,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct DishCooked {
  pub kitchen: Entity,
  pub taste: Taste,
}

/// Stand-in display collaborator during development: logs what a UI would
/// render.
pub fn log_kitchen_activity(
  mut slots: MessageReader<KitchenSlotsChanged>,
  mut dishes: MessageReader<DishCooked>,
) {
  for change in slots.read() {
    let filled = change.slots.iter().filter(|s| s.is_some()).count();
    debug!("kitchen slots: {filled}/{} filled", change.slots.len());
  }
  for dish in dishes.read() {
    info!("dish ready, it came out {}", dish.taste.label());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn slot(value: u8) -> IngredientSlot {
    IngredientSlot {
      value,
      sprite: format!("sprites/ingredient_{value}.png"),
    }
  }

  #[test]
  fn taste_is_sum_mod_three() {
    assert_eq!(taste_of([1, 0, 1]), Taste::Salty, "sum 2 -> salty");
    assert_eq!(taste_of([0, 0, 0]), Taste::Tasty, "sum 0 -> tasty");
    assert_eq!(taste_of([1, 1, 1]), Taste::Tasty, "sum 3 wraps to tasty");
    assert_eq!(taste_of([1, 0, 0]), Taste::Spicy, "sum 1 -> spicy");
  }

  #[test]
  fn filling_the_last_slot_cooks_and_resets() {
    let mut kitchen = Kitchen::new(3);
    assert!(kitchen.submit(slot(1)).accepted());
    assert!(kitchen.submit(slot(0)).accepted());
    assert_eq!(kitchen.count(), 2);

    match kitchen.submit(slot(1)) {
      SubmitOutcome::Cooked { taste, consumed } => {
        assert_eq!(taste, Taste::Salty);
        assert_eq!(consumed.len(), 3);
        assert_eq!(
          consumed.iter().map(|s| s.value).collect::<Vec<_>>(),
          vec![1, 0, 1],
          "submission order preserved"
        );
      }
      other => panic!("expected a cooked dish, got {other:?}"),
    }
    assert_eq!(kitchen.count(), 0, "kitchen resets after cooking");
  }

  #[test]
  fn count_never_exceeds_capacity() {
    let mut kitchen = Kitchen::new(2);
    assert!(kitchen.submit(slot(0)).accepted());
    // Second submission fills the kitchen and cooks, so a third can never
    // observe a full-but-uncooked state.
    assert!(kitchen.submit(slot(0)).accepted());
    assert_eq!(kitchen.count(), 0);

    let mut stuck = Kitchen {
      capacity: 0,
      ingredients: Vec::new(),
    };
    assert!(
      !stuck.submit(slot(1)).accepted(),
      "zero-capacity kitchen rejects everything"
    );
  }

  #[test]
  fn slot_states_are_ordered_and_padded() {
    let mut kitchen = Kitchen::new(3);
    kitchen.submit(slot(1));
    let states = kitchen.slot_states();
    assert_eq!(states.len(), 3);
    assert!(states[0].is_some());
    assert!(states[1].is_none() && states[2].is_none());
  }
}
