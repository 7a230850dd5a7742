pub mod config;

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod bucket;
            pub mod duration;
            pub mod errors;
            pub mod normalizer;
            pub mod ports;
            pub mod range;
            pub mod time_entry;
            pub mod time_entry_view;
            pub mod zone;
            pub mod zoned_timestamp;
        }
        pub mod use_cases {
            pub mod create_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod total_duration {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod time_entries_report {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_overlaps {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod time_entries_in_memory;
            }
        }
    }
}

pub mod shell;
