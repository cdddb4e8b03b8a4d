use std::{
    sync::{Arc, Mutex},
    thread,
};

use rusqlite::Connection;

/// Poison the database mutex by panicking on another thread while holding the lock.
pub(crate) fn poison_lock(db_connection: &Arc<Mutex<Connection>>) {
    let db_connection = db_connection.clone();

    let result = thread::spawn(move || {
        let _connection = db_connection.lock().unwrap();
        panic!("panicking while holding the database lock");
    })
    .join();

    assert!(result.is_err(), "the locking thread should have panicked");
}
