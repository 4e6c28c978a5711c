pub mod modules {
    pub mod content_records {
        pub mod core {
            pub mod a1;
            pub mod content_record;
            pub mod ports;
            pub mod sheet_layout;
        }
        pub mod application {
            pub mod errors;
            pub mod sheet_snapshot;
            pub mod timestamp;
        }
        pub mod use_cases {
            pub mod list_content_records {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_content_record {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_content_record {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_content_record {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod google_auth;
                pub mod google_sheets;
                pub mod tabular_in_memory;
            }
        }
    }

    pub mod chat {
        pub mod core {
            pub mod conversation;
            pub mod ports;
            pub mod system_prompt;
        }
        pub mod use_cases {
            pub mod send_chat_message {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report_chat_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod chat_in_memory;
                pub mod content_records_context;
                pub mod gemini;
            }
        }
    }

    pub mod contact {
        pub mod core {
            pub mod notification;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod send_contact_message {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod notification_in_memory;
                pub mod smtp;
            }
        }
    }
}

pub mod shell;
