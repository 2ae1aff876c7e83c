pub mod pickexport_core;
