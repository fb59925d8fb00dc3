pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod time_logs {
        pub mod core {
            pub mod changes;
            pub mod decision;
            pub mod elapsed;
            pub mod format;
            pub mod outcome;
            pub mod state;
        }
        pub mod application {
            pub mod elapsed_ticker;
            pub mod errors;
            pub mod time_tracker;
        }
        pub mod use_cases {
            pub mod start_time_log {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod pause_time_log {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod resume_time_log {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod finish_time_log {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_time_log {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_logs {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod mappers {
                pub mod time_log_row;
            }
            pub mod outbound {
                pub mod time_log_repository;
            }
        }
    }
}

pub mod shell;
