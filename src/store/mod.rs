//! In-memory trip store: owns every trip plus the active-trip selection.

use uuid::Uuid;

use crate::analytics::{budget_summary, BudgetSummary};
use crate::trip::{Expense, ExpenseCategory, Trip};

/// Owns the trip collection and the single active-trip selection.
///
/// All expense mutations target the active trip. Expense operations silently
/// do nothing when no trip is active, and reads that need one fall back to
/// empty or zeroed results; callers never see an error for an empty store.
#[derive(Debug, Default)]
pub struct TripStore {
    trips: Vec<Trip>,
    active: Option<Uuid>,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every trip, in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The currently selected trip, resolved by id on every read so updates
    /// can never leave a stale copy behind.
    pub fn active_trip(&self) -> Option<&Trip> {
        let id = self.active?;
        self.trips.iter().find(|trip| trip.id == id)
    }

    fn active_trip_mut(&mut self) -> Option<&mut Trip> {
        let id = self.active?;
        self.trips.iter_mut().find(|trip| trip.id == id)
    }

    /// Selects an existing trip, or clears the selection with `None`. Ids not
    /// present in the store are ignored.
    pub fn set_active_trip(&mut self, id: Option<Uuid>) {
        match id {
            Some(id) if self.trips.iter().any(|trip| trip.id == id) => self.active = Some(id),
            Some(_) => {}
            None => self.active = None,
        }
    }

    /// Adds a trip and makes it the active one, returning its id.
    pub fn add_trip(&mut self, trip: Trip) -> Uuid {
        let id = trip.id;
        self.trips.push(trip);
        self.active = Some(id);
        tracing::debug!(%id, "trip added and selected");
        id
    }

    /// Applies `mutate` to the matching trip; unknown ids are ignored.
    pub fn update_trip<F>(&mut self, id: Uuid, mutate: F)
    where
        F: FnOnce(&mut Trip),
    {
        if let Some(trip) = self.trips.iter_mut().find(|trip| trip.id == id) {
            mutate(trip);
        }
    }

    /// Removes the matching trip. If it was the active one, the first
    /// remaining trip (or nothing) becomes active.
    pub fn delete_trip(&mut self, id: Uuid) {
        self.trips.retain(|trip| trip.id != id);
        if self.active == Some(id) {
            self.active = self.trips.first().map(|trip| trip.id);
            tracing::debug!(%id, "active trip deleted, selection moved");
        }
    }

    /// Appends an expense to the active trip and returns its id, or `None`
    /// (leaving all state untouched) when no trip is active.
    pub fn add_expense(&mut self, expense: Expense) -> Option<Uuid> {
        let trip = self.active_trip_mut()?;
        Some(trip.add_expense(expense))
    }

    /// Applies `mutate` to the matching expense of the active trip; does
    /// nothing without an active trip or for unknown ids.
    pub fn update_expense<F>(&mut self, id: Uuid, mutate: F)
    where
        F: FnOnce(&mut Expense),
    {
        if let Some(trip) = self.active_trip_mut() {
            if let Some(expense) = trip.expense_mut(id) {
                mutate(expense);
            }
        }
    }

    /// Removes the matching expense from the active trip, if any.
    pub fn delete_expense(&mut self, id: Uuid) {
        if let Some(trip) = self.active_trip_mut() {
            trip.remove_expense(id);
        }
    }

    /// The active trip's expenses in the given category; empty without one.
    pub fn expenses_by_category(&self, category: ExpenseCategory) -> Vec<&Expense> {
        self.active_trip()
            .map(|trip| {
                trip.expenses
                    .iter()
                    .filter(|expense| expense.category == category)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Budget summary of the active trip, or the all-zero summary without one.
    pub fn budget_summary(&self) -> BudgetSummary {
        self.active_trip()
            .map(budget_summary)
            .unwrap_or_else(BudgetSummary::empty)
    }
}
