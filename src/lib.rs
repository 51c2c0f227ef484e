pub mod shared {
    pub mod infrastructure {
        pub mod config;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod commands;
            pub mod employee;
            pub mod policy;
            pub mod resolve_expiry;
            pub mod status;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                    pub mod webhook;
                }
            }
            pub mod register_employee {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_status_log {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_store;
                pub mod employee_store_in_memory;
            }
        }
    }
}

pub mod shell;
