//! Report descriptor tables for the pedal's real multi-function interface.
//!
//! The replacement table is a literal, pre-computed copy of the device's
//! own descriptor with a single change: the Usage Minimum of the
//! ordinary-key array item is moved from 0x00 to 0x35, so the keycode the
//! firmware sends is resolved 0x35 usages higher by the host parser
//! (factory 'b', keycode 5, parses as F1). The ReportID 1 input item
//! layout is byte-identical between the two tables, which keeps the fixed
//! offsets used by [super::remap] valid against either descriptor.

/// Length fingerprint of the real interface's descriptor.
pub const FOOTSWITCH_DESCRIPTOR_SIZE: usize = 212;

/// Length fingerprint of the pedal's bogus secondary interface. It
/// advertises a vendor-ish pointer blob and never sends a single report.
pub const BOGUS_DESCRIPTOR_SIZE: usize = 23;

/// Usage Minimum written into the replacement's ordinary-key input item.
pub const FIXED_USAGE_MINIMUM: u8 = 0x35;

/// The descriptor the device itself reports, as dumped by hid-recorder.
pub const FOOTSWITCH_DESCRIPTOR: [u8; 212] = [
    0x05, 0x01, // Usage Page (Generic Desktop)              0
    0x09, 0x06, // Usage (Keyboard)                          2
    0xA1, 0x01, // Collection (Application)                  4
    0x85, 0x01, //  Report ID (1)                            6
    0x05, 0x07, //  Usage Page (Keyboard/Keypad)             8
    0x19, 0xE0, //  Usage Minimum (224)                      10
    0x29, 0xE7, //  Usage Maximum (231)                      12
    0x15, 0x00, //  Logical Minimum (0)                      14
    0x25, 0x01, //  Logical Maximum (1)                      16
    0x75, 0x01, //  Report Size (1)                          18
    0x95, 0x08, //  Report Count (8)                         20
    0x81, 0x02, //  Input (Data,Var,Abs)                     22
    0x95, 0x01, //  Report Count (1)                         24
    0x75, 0x08, //  Report Size (8)                          26
    0x81, 0x01, //  Input (Cnst,Arr,Abs)                     28
    0x95, 0x03, //  Report Count (3)                         30
    0x75, 0x01, //  Report Size (1)                          32
    0x05, 0x08, //  Usage Page (LED)                         34
    0x19, 0x01, //  Usage Minimum (1)                        36
    0x29, 0x03, //  Usage Maximum (3)                        38
    0x91, 0x02, //  Output (Data,Var,Abs)                    40
    0x95, 0x05, //  Report Count (5)                         42
    0x75, 0x01, //  Report Size (1)                          44
    0x91, 0x01, //  Output (Cnst,Arr,Abs)                    46
    0x95, 0x06, //  Report Count (6)                         48
    0x75, 0x08, //  Report Size (8)                          50
    0x15, 0x00, //  Logical Minimum (0)                      52
    0x25, 0xFF, //  Logical Maximum (255)                    54
    0x05, 0x07, //  Usage Page (Keyboard/Keypad)             56
    0x19, 0x00, //  Usage Minimum (0)                        58
    0x29, 0xFF, //  Usage Maximum (255)                      60
    0x81, 0x00, //  Input (Data,Arr,Abs)                     62
    0xC0, //       End Collection                            64
    0x05, 0x01, // Usage Page (Generic Desktop)              65
    0x09, 0x02, // Usage (Mouse)                             67
    0xA1, 0x01, // Collection (Application)                  69
    0x85, 0x02, //  Report ID (2)                            71
    0x09, 0x01, //  Usage (Pointer)                          73
    0xA1, 0x00, //  Collection (Physical)                    75
    0x05, 0x09, //   Usage Page (Button)                     77
    0x19, 0x01, //   Usage Minimum (1)                       79
    0x29, 0x05, //   Usage Maximum (5)                       81
    0x15, 0x00, //   Logical Minimum (0)                     83
    0x25, 0x01, //   Logical Maximum (1)                     85
    0x95, 0x05, //   Report Count (5)                        87
    0x75, 0x01, //   Report Size (1)                         89
    0x81, 0x02, //   Input (Data,Var,Abs)                    91
    0x95, 0x01, //   Report Count (1)                        93
    0x75, 0x03, //   Report Size (3)                         95
    0x81, 0x03, //   Input (Cnst,Var,Abs)                    97
    0x05, 0x01, //   Usage Page (Generic Desktop)            99
    0x09, 0x30, //   Usage (X)                               101
    0x09, 0x31, //   Usage (Y)                               103
    0x09, 0x38, //   Usage (Wheel)                           105
    0x15, 0x81, //   Logical Minimum (-127)                  107
    0x25, 0x7F, //   Logical Maximum (127)                   109
    0x75, 0x08, //   Report Size (8)                         111
    0x95, 0x03, //   Report Count (3)                        113
    0x81, 0x06, //   Input (Data,Var,Rel)                    115
    0xC0, //        End Collection                           117
    0xC0, //       End Collection                            118
    0x05, 0x01, // Usage Page (Generic Desktop)              119
    0x09, 0x05, // Usage (Gamepad)                           121
    0xA1, 0x01, // Collection (Application)                  123
    0x85, 0x04, //  Report ID (4)                            125
    0x09, 0x01, //  Usage (Pointer)                          127
    0xA1, 0x00, //  Collection (Physical)                    129
    0x09, 0x30, //   Usage (X)                               131
    0x09, 0x31, //   Usage (Y)                               133
    0x15, 0xFF, //   Logical Minimum (-1)                    135
    0x25, 0x01, //   Logical Maximum (1)                     137
    0x95, 0x02, //   Report Count (2)                        139
    0x75, 0x02, //   Report Size (2)                         141
    0x81, 0x02, //   Input (Data,Var,Abs)                    143
    0xC0, //        End Collection                           145
    0x95, 0x04, //  Report Count (4)                         146
    0x75, 0x01, //  Report Size (1)                          148
    0x81, 0x03, //  Input (Cnst,Var,Abs)                     150
    0x05, 0x09, //  Usage Page (Button)                      152
    0x19, 0x01, //  Usage Minimum (1)                        154
    0x29, 0x08, //  Usage Maximum (8)                        156
    0x15, 0x00, //  Logical Minimum (0)                      158
    0x25, 0x01, //  Logical Maximum (1)                      160
    0x95, 0x08, //  Report Count (8)                         162
    0x75, 0x01, //  Report Size (1)                          164
    0x81, 0x02, //  Input (Data,Var,Abs)                     166
    0xC0, //       End Collection                            168
    0x05, 0x0C, // Usage Page (Consumer)                     169
    0x09, 0x01, // Usage (Consumer Control)                  171
    0xA1, 0x01, // Collection (Application)                  173
    0x85, 0x03, //  Report ID (3)                            175
    0x05, 0x01, //  Usage Page (Generic Desktop)             177
    0x09, 0x81, //  Usage (System Power Down)                179
    0x09, 0x82, //  Usage (System Sleep)                     181
    0x75, 0x01, //  Report Size (1)                          183
    0x95, 0x02, //  Report Count (2)                         185
    0x81, 0x02, //  Input (Data,Var,Abs)                     187
    0x95, 0x06, //  Report Count (6)                         189
    0x75, 0x01, //  Report Size (1)                          191
    0x81, 0x03, //  Input (Cnst,Var,Abs)                     193
    0x05, 0x0C, //  Usage Page (Consumer)                    195
    0x95, 0x01, //  Report Count (1)                         197
    0x75, 0x10, //  Report Size (16)                         199
    0x19, 0x00, //  Usage Minimum (0)                        201
    0x2A, 0x2E, 0x02, //  Usage Maximum (558)                203
    0x26, 0x2E, 0x02, //  Logical Maximum (558)              206
    0x81, 0x00, //  Input (Data,Arr,Abs)                     209
    0xC0, //       End Collection                            211
];

/// Replacement descriptor. Identical keyboard report layout, ordinary-key
/// Usage Minimum shifted to 0x35, and the never-used gamepad collection
/// dropped.
pub const FIXED_DESCRIPTOR: [u8; 162] = [
    0x05, 0x01, // Usage Page (Generic Desktop)              0
    0x09, 0x06, // Usage (Keyboard)                          2
    0xA1, 0x01, // Collection (Application)                  4
    0x85, 0x01, //  Report ID (1)                            6
    0x05, 0x07, //  Usage Page (Keyboard/Keypad)             8
    0x19, 0xE0, //  Usage Minimum (224)                      10
    0x29, 0xE7, //  Usage Maximum (231)                      12
    0x15, 0x00, //  Logical Minimum (0)                      14
    0x25, 0x01, //  Logical Maximum (1)                      16
    0x75, 0x01, //  Report Size (1)                          18
    0x95, 0x08, //  Report Count (8)                         20
    0x81, 0x02, //  Input (Data,Var,Abs)                     22
    0x95, 0x01, //  Report Count (1)                         24
    0x75, 0x08, //  Report Size (8)                          26
    0x81, 0x01, //  Input (Cnst,Arr,Abs)                     28
    0x95, 0x03, //  Report Count (3)                         30
    0x75, 0x01, //  Report Size (1)                          32
    0x05, 0x08, //  Usage Page (LED)                         34
    0x19, 0x01, //  Usage Minimum (1)                        36
    0x29, 0x03, //  Usage Maximum (3)                        38
    0x91, 0x02, //  Output (Data,Var,Abs)                    40
    0x95, 0x05, //  Report Count (5)                         42
    0x75, 0x01, //  Report Size (1)                          44
    0x91, 0x01, //  Output (Cnst,Arr,Abs)                    46
    0x95, 0x06, //  Report Count (6)                         48
    0x75, 0x08, //  Report Size (8)                          50
    0x15, 0x00, //  Logical Minimum (0)                      52
    0x25, 0xFF, //  Logical Maximum (255)                    54
    0x05, 0x07, //  Usage Page (Keyboard/Keypad)             56
    0x19, 0x35, //  Usage Minimum (0x35)                     58
    0x29, 0xFF, //  Usage Maximum (255)                      60
    0x81, 0x00, //  Input (Data,Arr,Abs)                     62
    0xC0, //       End Collection                            64
    0x05, 0x0C, // Usage Page (Consumer)                     65
    0x09, 0x01, // Usage (Consumer Control)                  67
    0xA1, 0x01, // Collection (Application)                  69
    0x85, 0x03, //  Report ID (3)                            71
    0x05, 0x01, //  Usage Page (Generic Desktop)             73
    0x09, 0x81, //  Usage (System Power Down)                75
    0x09, 0x82, //  Usage (System Sleep)                     77
    0x75, 0x01, //  Report Size (1)                          79
    0x95, 0x02, //  Report Count (2)                         81
    0x81, 0x02, //  Input (Data,Var,Abs)                     83
    0x95, 0x06, //  Report Count (6)                         85
    0x75, 0x01, //  Report Size (1)                          87
    0x81, 0x03, //  Input (Cnst,Var,Abs)                     89
    0x05, 0x0C, //  Usage Page (Consumer)                    91
    0x95, 0x01, //  Report Count (1)                         93
    0x75, 0x10, //  Report Size (16)                         95
    0x19, 0x00, //  Usage Minimum (0)                        97
    0x2A, 0x2E, 0x02, //  Usage Maximum (558)                99
    0x26, 0x2E, 0x02, //  Logical Maximum (558)              102
    0x81, 0x00, //  Input (Data,Arr,Abs)                     105
    0xC0, //       End Collection                            107
    0x05, 0x01, // Usage Page (Generic Desktop)              108
    0x09, 0x02, // Usage (Mouse)                             110
    0xA1, 0x01, // Collection (Application)                  112
    0x85, 0x02, //  Report ID (2)                            114
    0x09, 0x01, //  Usage (Pointer)                          116
    0xA1, 0x00, //  Collection (Physical)                    118
    0x05, 0x09, //   Usage Page (Button)                     120
    0x19, 0x01, //   Usage Minimum (1)                       122
    0x29, 0x05, //   Usage Maximum (5)                       124
    0x15, 0x00, //   Logical Minimum (0)                     126
    0x25, 0x01, //   Logical Maximum (1)                     128
    0x95, 0x05, //   Report Count (5)                        130
    0x75, 0x01, //   Report Size (1)                         132
    0x81, 0x02, //   Input (Data,Var,Abs)                    134
    0x95, 0x01, //   Report Count (1)                        136
    0x75, 0x03, //   Report Size (3)                         138
    0x81, 0x03, //   Input (Cnst,Var,Abs)                    140
    0x05, 0x01, //   Usage Page (Generic Desktop)            142
    0x09, 0x30, //   Usage (X)                               144
    0x09, 0x31, //   Usage (Y)                               146
    0x09, 0x38, //   Usage (Wheel)                           148
    0x15, 0x81, //   Logical Minimum (-127)                  150
    0x25, 0x7F, //   Logical Maximum (127)                   152
    0x75, 0x08, //   Report Size (8)                         154
    0x95, 0x03, //   Report Count (3)                        156
    0x81, 0x06, //   Input (Data,Var,Rel)                    158
    0xC0, //        End Collection                           160
    0xC0, //       End Collection                            161
];

/// Substitute the replacement descriptor for the device's own. Only a
/// descriptor matching the 212 byte fingerprint is swapped; anything else
/// comes back untouched, since applying a fixed table to an unrecognized
/// layout would corrupt the fields of some other device.
pub fn fixup(rdesc: &[u8]) -> &[u8] {
    if rdesc.len() != FOOTSWITCH_DESCRIPTOR_SIZE {
        return rdesc;
    }
    &FIXED_DESCRIPTOR
}
