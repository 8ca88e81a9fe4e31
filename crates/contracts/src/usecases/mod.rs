pub mod u001_load_references;
