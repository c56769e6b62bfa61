//! Employee store.
//!
//! Owns the canonical employee collection. Every mutation is written through to
//! the `employees` slot as one JSON blob before it becomes visible in memory.

mod seed;

pub use seed::seed_employees;

use std::collections::HashSet;

use tokio::sync::RwLock;

use crate::db::SlotStorage;
use crate::errors::AppError;
use crate::models::{distinct_departments, DashboardStats, Employee, EmployeeInput};

/// Slot holding the serialized collection.
pub const EMPLOYEES_SLOT: &str = "employees";

/// Outcome of an applied mutation and the revision it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub revision: u64,
}

struct StoreState {
    employees: Vec<Employee>,
    /// Bumped once per applied mutation
    revision: u64,
}

/// Write-through store for employee records.
pub struct EmployeeStore {
    slots: SlotStorage,
    state: RwLock<StoreState>,
}

impl EmployeeStore {
    /// Load the collection from its slot, falling back to the seed set when the
    /// slot is absent or unreadable.
    pub async fn load(slots: SlotStorage) -> Result<Self, AppError> {
        let employees = match slots.get(EMPLOYEES_SLOT).await? {
            Some(raw) => match parse_collection(&raw) {
                Ok(employees) => {
                    tracing::info!("Loaded {} employees from storage", employees.len());
                    employees
                }
                Err(reason) => {
                    tracing::warn!("Stored employees are unreadable ({}), using seed data", reason);
                    seed_employees()
                }
            },
            None => {
                tracing::info!("No stored employees, using seed data");
                seed_employees()
            }
        };

        persist(&slots, &employees).await?;

        Ok(Self {
            slots,
            state: RwLock::new(StoreState {
                employees,
                revision: 0,
            }),
        })
    }

    /// Current revision.
    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> Vec<Employee> {
        self.state.read().await.employees.clone()
    }

    /// Collection and revision read under one lock.
    pub async fn snapshot(&self) -> (Vec<Employee>, u64) {
        let state = self.state.read().await;
        (state.employees.clone(), state.revision)
    }

    pub async fn get(&self, id: &str) -> Option<Employee> {
        let state = self.state.read().await;
        state.employees.iter().find(|e| e.id == id).cloned()
    }

    /// Append a new record with a freshly generated id.
    pub async fn add(&self, input: EmployeeInput) -> Result<Applied<Employee>, AppError> {
        let mut state = self.state.write().await;

        let id = generate_id(&state.employees);
        let employee = Employee::from_input(id, input);
        state.employees.push(employee.clone());

        if let Err(e) = persist(&self.slots, &state.employees).await {
            state.employees.pop();
            return Err(e);
        }

        state.revision += 1;
        tracing::info!(id = %employee.id, revision = state.revision, "Employee added");
        Ok(Applied {
            value: employee,
            revision: state.revision,
        })
    }

    /// Replace all non-id fields of a record. Unknown ids are a no-op and
    /// return `Ok(None)`.
    pub async fn update(
        &self,
        id: &str,
        input: EmployeeInput,
    ) -> Result<Option<Applied<Employee>>, AppError> {
        let mut state = self.state.write().await;

        let Some(index) = state.employees.iter().position(|e| e.id == id) else {
            tracing::debug!(id, "Update ignored, employee not found");
            return Ok(None);
        };

        let previous = state.employees[index].clone();
        state.employees[index].apply(input);

        if let Err(e) = persist(&self.slots, &state.employees).await {
            state.employees[index] = previous;
            return Err(e);
        }

        state.revision += 1;
        tracing::info!(id, revision = state.revision, "Employee updated");
        Ok(Some(Applied {
            value: state.employees[index].clone(),
            revision: state.revision,
        }))
    }

    /// Remove a record and return it. Unknown ids are a no-op and return
    /// `Ok(None)`.
    pub async fn delete(&self, id: &str) -> Result<Option<Applied<Employee>>, AppError> {
        let mut state = self.state.write().await;

        let Some(index) = state.employees.iter().position(|e| e.id == id) else {
            tracing::debug!(id, "Delete ignored, employee not found");
            return Ok(None);
        };

        let removed = state.employees.remove(index);

        if let Err(e) = persist(&self.slots, &state.employees).await {
            state.employees.insert(index, removed);
            return Err(e);
        }

        state.revision += 1;
        tracing::info!(id, revision = state.revision, "Employee deleted");
        Ok(Some(Applied {
            value: removed,
            revision: state.revision,
        }))
    }

    /// Discard every change and go back to the seed set.
    pub async fn reset(&self) -> Result<Applied<Vec<Employee>>, AppError> {
        let mut state = self.state.write().await;

        let seed = seed_employees();
        persist(&self.slots, &seed).await?;

        state.employees = seed.clone();
        state.revision += 1;
        tracing::info!(revision = state.revision, "Employees reset to seed data");
        Ok(Applied {
            value: seed,
            revision: state.revision,
        })
    }

    /// Distinct departments in first-seen order.
    pub async fn departments(&self) -> Vec<String> {
        distinct_departments(&self.state.read().await.employees)
    }

    pub async fn stats(&self, year: i32) -> DashboardStats {
        DashboardStats::compute(&self.state.read().await.employees, year)
    }
}

/// Parse a stored collection, rejecting duplicate ids.
fn parse_collection(raw: &str) -> Result<Vec<Employee>, String> {
    let employees: Vec<Employee> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    if let Some(dup) = employees.iter().find(|e| !seen.insert(e.id.as_str())) {
        return Err(format!("duplicate id {}", dup.id));
    }

    Ok(employees)
}

async fn persist(slots: &SlotStorage, employees: &[Employee]) -> Result<(), AppError> {
    let blob = serde_json::to_string(employees)?;
    slots.set(EMPLOYEES_SLOT, &blob).await
}

fn generate_id(existing: &[Employee]) -> String {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !existing.iter().any(|e| e.id == id) {
            return id;
        }
    }
}
