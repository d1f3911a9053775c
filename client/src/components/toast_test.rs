use super::*;

#[test]
fn toast_class_maps_each_level() {
    assert_eq!(toast_class(NoticeLevel::Info), "toast toast--info");
    assert_eq!(toast_class(NoticeLevel::Success), "toast toast--success");
    assert_eq!(toast_class(NoticeLevel::Error), "toast toast--error");
}
