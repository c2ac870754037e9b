pub mod shared {
    pub mod core {
        pub mod pagination;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod auth;
        pub mod http {
            pub mod error;
            pub mod request_id;
        }
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod attendee;
            pub mod comment;
            pub mod event;
            pub mod ports;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_attendees {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_attendee {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_comments {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_comment {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
