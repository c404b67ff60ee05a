const COMMANDS: &[&str] = &[
    "get_pending_share",
    "clear_pending_share",
    "handle_share_intent",
];

fn main() {
    // The native side (Android activity plugin / Swift package) is linked by the host app,
    // so no android_path/ios_path here.
    tauri_plugin::Builder::new(COMMANDS).build();
}
