//! Общие типы записей склада: товары, поставщики и остатки поставщиков.
//!
//! Крейт не зависит от хранилища и HTTP; бэкенд использует эти типы как
//! единый контракт данных.

pub mod domain;
