use rowmap::{
    driver::{Connection, ExecResult, Rows, Slot},
    stmt::Value,
    Result,
};

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Records every statement and serves canned result sets.
#[derive(Debug, Default, Clone)]
pub struct Mock {
    log: Rc<RefCell<Log>>,
}

#[derive(Debug, Default)]
pub struct Log {
    pub executed: Vec<(String, Vec<Value>)>,
    pub queried: Vec<(String, Vec<Value>)>,
    pub closed: usize,
    results: VecDeque<(Vec<String>, Vec<Vec<Value>>)>,
}

impl Mock {
    pub fn push_result(&self, columns: &[&str], rows: Vec<Vec<Value>>) {
        let columns = columns.iter().map(|name| name.to_string()).collect();
        self.log.borrow_mut().results.push_back((columns, rows));
    }

    pub fn log(&self) -> std::cell::Ref<'_, Log> {
        self.log.borrow()
    }
}

impl Connection for Mock {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        self.log
            .borrow_mut()
            .executed
            .push((sql.to_string(), params.to_vec()));

        Ok(ExecResult {
            rows_affected: 1,
            last_insert_id: None,
        })
    }

    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Box<dyn Rows + '_>> {
        let mut log = self.log.borrow_mut();
        log.queried.push((sql.to_string(), params.to_vec()));
        let (columns, rows) = log.results.pop_front().unwrap_or_default();

        Ok(Box::new(MockRows {
            columns,
            rows: rows.into(),
            current: None,
            closed: false,
            log: self.log.clone(),
        }))
    }
}

struct MockRows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
    closed: bool,
    log: Rc<RefCell<Log>>,
}

impl Rows for MockRows {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn advance(&mut self) -> Result<bool> {
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn scan_into(&mut self, slots: &mut [Slot]) -> Result<()> {
        let row = self.current.as_ref().expect("advance before scan");
        assert_eq!(row.len(), slots.len());

        for (slot, cell) in slots.iter_mut().zip(row) {
            slot.set(cell.clone())?;
        }

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.log.borrow_mut().closed += 1;
        }
        Ok(())
    }
}
