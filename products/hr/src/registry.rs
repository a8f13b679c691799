use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::{
    HrResult,
    employee::{Employee, EmployeeId, Gender, NewEmployee},
};

/// Records present when a seeded registry is built.
pub fn seed_employees() -> Vec<Employee> {
    let rows = [
        (1, "John Smith", 32, Gender::Male, 5000.0),
        (2, "Jane Johnson", 28, Gender::Female, 6000.0),
        (3, "David Williams", 35, Gender::Male, 5500.0),
        (4, "Emily Brown", 23, Gender::Female, 4500.0),
        (5, "Michael Jones", 40, Gender::Male, 7000.0),
    ];
    rows.into_iter()
        .map(|(id, name, age, gender, salary)| Employee {
            id,
            name: name.to_string(),
            age,
            gender,
            salary,
        })
        .collect()
}

#[derive(Debug)]
struct Inner {
    employees: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// In-memory employee store.
///
/// Entries are only ever added, so the id counter always equals
/// `len() + 1` when a new record is assigned. The counter and the map share
/// one lock, which keeps assignment and insertion atomic across threads.
#[derive(Debug)]
pub struct EmployeeRegistry {
    inner: RwLock<Inner>,
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl EmployeeRegistry {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::from_records(seed_employees())
    }

    fn from_records(records: Vec<Employee>) -> Self {
        let employees: BTreeMap<_, _> = records.into_iter().map(|e| (e.id, e)).collect();
        let next_id = employees.len() as EmployeeId + 1;
        Self {
            inner: RwLock::new(Inner { employees, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().employees.is_empty()
    }

    pub fn create(&self, request: NewEmployee) -> Employee {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let employee = request.into_employee(id);
        inner.employees.insert(id, employee.clone());
        info!(employee_id = id, gender = %employee.gender, "employee created");
        employee
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        let found = self.inner.read().employees.get(&id).cloned();
        debug!(employee_id = id, found = found.is_some(), "employee lookup");
        found
    }

    /// Employees whose gender matches `raw`, compared case-insensitively,
    /// in ascending id order.
    pub fn get_by_gender(&self, raw: &str) -> HrResult<Vec<Employee>> {
        let gender: Gender = raw.parse()?;
        let matches = self
            .inner
            .read()
            .employees
            .values()
            .filter(|employee| employee.gender == gender)
            .cloned()
            .collect::<Vec<_>>();
        debug!(%gender, count = matches.len(), "employees filtered by gender");
        Ok(matches)
    }
}
