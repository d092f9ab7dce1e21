// Domain-driven module structure for the node-log extractor worker.

// Core parsing engine
pub mod scan;

// Request/response boundary
pub mod transport;

// Worker configuration
pub mod conf;
