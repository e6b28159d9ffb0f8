pub mod tenant_connection_manager;
