pub mod ai_tool;
pub mod club;
pub mod course;
pub mod deal;
pub mod duty_leave;
pub mod emergency;
pub mod entity;
pub mod event;
pub mod note;
pub mod notification;
pub mod pg_room;
pub mod record;
pub mod youtube_channel;

pub use ai_tool::AiTool;
pub use club::Club;
pub use course::Course;
pub use deal::Deal;
pub use duty_leave::DutyLeave;
pub use entity::EntityKind;
pub use event::Event;
pub use note::Note;
pub use notification::Notification;
pub use pg_room::PgRoom;
pub use record::Record;
pub use youtube_channel::YouTubeChannel;
