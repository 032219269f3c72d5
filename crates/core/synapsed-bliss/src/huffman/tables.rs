//! Static Huffman code tables, one per parameter set.
//!
//! Encode tables map a joint symbol index `z1_high * row + z2 + z2_max` to
//! `(codeword, bit length)`. Decode tables are binary trees stored as
//! `[left, right, symbol]` triples where `symbol == -1` marks an inner node.
//! A handful of tail codewords longer than 32 bits were truncated when the
//! tables were generated; they are kept as-is for wire compatibility.

pub(super) const ENCODE_B0: [(u64, u32); 99] = [
    // z1 high = 0
    (98695, 22),
    (24687, 20),
    (6170, 18),
    (720, 17),
    (387, 14),
    (44, 13),
    (15, 11),
    (4, 10),
    (0, 9),
    (2, 7),
    (3, 6),
    (7, 5),
    (11, 4),
    (2, 4),
    (7, 3),
    (4, 3),
    (2, 3),
    (3, 3),
    (6, 3),
    (1, 4),
    (10, 4),
    (6, 5),
    (2, 6),
    (1, 7),
    (7, 8),
    (3, 10),
    (14, 11),
    (99, 12),
    (386, 14),
    (1543, 16),
    (6169, 18),
    (24686, 20),
    (98694, 22),

    // z1 high = 1
    (12632739, 29),
    (3158182, 27),
    (789544, 25),
    (197385, 23),
    (49345, 21),
    (12342, 19),
    (1447, 18),
    (722, 17),
    (770, 15),
    (384, 14),
    (47, 13),
    (98, 12),
    (9, 12),
    (13, 11),
    (10, 11),
    (27, 10),
    (25, 10),
    (26, 10),
    (5, 11),
    (12, 11),
    (8, 12),
    (97, 12),
    (46, 13),
    (91, 14),
    (181, 15),
    (721, 17),
    (1446, 18),
    (12337, 19),
    (49344, 21),
    (197384, 23),
    (394775, 24),
    (3158181, 27),
    (12632738, 29),

    // z1 high = 2
    (1632561835, 44),
    (816280916, 43),
    (204070228, 41),
    (51017556, 39),
    (3233979860, 37),
    (808494964, 35),
    (202123740, 33),
    (101061869, 32),
    (50530933, 31),
    (12632789, 29),
    (12632732, 29),
    (6316368, 28),
    (3158196, 27),
    (3158180, 27),
    (1579097, 26),
    (1579095, 26),
    (1579093, 26),
    (1579094, 26),
    (1579096, 26),
    (1579099, 26),
    (3158185, 27),
    (6316367, 28),
    (6316395, 28),
    (12632788, 29),
    (50530932, 31),
    (101061868, 32),
    (101061871, 32),
    (404247483, 34),
    (1616989931, 36),
    (2172992427, 38),
    (102035115, 40),
    (408140459, 42),
    (1632561834, 44),
];

pub(super) const DECODE_B0: [[i16; 3]; 197] = [
    [1, 188, -1], [2, 185, -1], [3, 180, -1], [4, 179, -1],
    [5, 176, -1], [6, 49, -1], [7, 48, -1], [8, 17, -1],
    [9, 10, -1], [-1, -1, 8], [11, 16, -1], [12, 15, -1],
    [13, 14, -1], [-1, -1, 53], [-1, -1, 45], [-1, -1, 51],
    [-1, -1, 25], [18, 41, -1], [19, 20, -1], [-1, -1, 7],
    [21, 22, -1], [-1, -1, 47], [23, 38, -1], [24, 25, -1],
    [-1, -1, 5], [26, 37, -1], [27, 36, -1], [28, 31, -1],
    [29, 30, -1], [-1, -1, 3], [-1, -1, 58], [32, 33, -1],
    [-1, -1, 40], [34, 35, -1], [-1, -1, 59], [-1, -1, 39],
    [-1, -1, 57], [-1, -1, 56], [39, 40, -1], [-1, -1, 55],
    [-1, -1, 43], [42, 45, -1], [43, 44, -1], [-1, -1, 52],
    [-1, -1, 46], [46, 47, -1], [-1, -1, 26], [-1, -1, 6],
    [-1, -1, 23], [50, 51, -1], [-1, -1, 9], [52, 175, -1],
    [53, 172, -1], [54, 171, -1], [55, 168, -1], [56, 167, -1],
    [57, 164, -1], [58, 59, -1], [-1, -1, 42], [60, 61, -1],
    [-1, -1, 41], [62, 163, -1], [63, 156, -1], [64, 155, -1],
    [65, 154, -1], [66, 69, -1], [67, 68, -1], [-1, -1, 61],
    [-1, -1, 37], [70, 151, -1], [71, 74, -1], [72, 73, -1],
    [-1, -1, 62], [-1, -1, 36], [75, 136, -1], [76, 123, -1],
    [77, 78, -1], [-1, -1, 35], [79, 82, -1], [80, 81, -1],
    [-1, -1, 79], [-1, -1, 64], [83, 84, -1], [-1, -1, 34],
    [85, 122, -1], [86, 87, -1], [-1, -1, 76], [88, 91, -1],
    [89, 90, -1], [-1, -1, 90], [-1, -1, 74], [92, 95, -1],
    [93, 94, -1], [-1, -1, 91], [-1, -1, 73], [96, 121, -1],
    [97, 98, -1], [-1, -1, 72], [99, 120, -1], [100, 101, -1],
    [-1, -1, 71], [102, 119, -1], [103, 104, -1], [-1, -1, 70],
    [105, 118, -1], [106, 107, -1], [-1, -1, 69], [108, 117, -1],
    [109, 110, -1], [-1, -1, 68], [111, 116, -1], [112, 113, -1],
    [-1, -1, 67], [114, 115, -1], [-1, -1, 98], [-1, -1, 66],
    [-1, -1, 97], [-1, -1, 96], [-1, -1, 95], [-1, -1, 94],
    [-1, -1, 93], [-1, -1, 92], [-1, -1, 87], [124, 133, -1],
    [125, 132, -1], [126, 131, -1], [127, 128, -1], [-1, -1, 77],
    [129, 130, -1], [-1, -1, 65], [-1, -1, 33], [-1, -1, 86],
    [-1, -1, 82], [134, 135, -1], [-1, -1, 83], [-1, -1, 81],
    [137, 150, -1], [138, 141, -1], [139, 140, -1], [-1, -1, 84],
    [-1, -1, 80], [142, 149, -1], [143, 144, -1], [-1, -1, 78],
    [145, 148, -1], [146, 147, -1], [-1, -1, 89], [-1, -1, 75],
    [-1, -1, 88], [-1, -1, 85], [-1, -1, 63], [152, 153, -1],
    [-1, -1, 32], [-1, -1, 0], [-1, -1, 60], [-1, -1, 30],
    [157, 158, -1], [-1, -1, 2], [159, 160, -1], [-1, -1, 38],
    [161, 162, -1], [-1, -1, 31], [-1, -1, 1], [-1, -1, 29],
    [165, 166, -1], [-1, -1, 28], [-1, -1, 4], [-1, -1, 54],
    [169, 170, -1], [-1, -1, 44], [-1, -1, 27], [-1, -1, 49],
    [173, 174, -1], [-1, -1, 50], [-1, -1, 48], [-1, -1, 24],
    [177, 178, -1], [-1, -1, 22], [-1, -1, 10], [-1, -1, 19],
    [181, 182, -1], [-1, -1, 13], [183, 184, -1], [-1, -1, 21],
    [-1, -1, 11], [186, 187, -1], [-1, -1, 16], [-1, -1, 17],
    [189, 194, -1], [190, 191, -1], [-1, -1, 15], [192, 193, -1],
    [-1, -1, 20], [-1, -1, 12], [195, 196, -1], [-1, -1, 18],
    [-1, -1, 14],
];

pub(super) const ENCODE_B1: [(u64, u32); 45] = [
    // z1 high = 0
    (1665896, 21),
    (24, 5),
    (0, 1),
    (13, 4),
    (832949, 20),

    // z1 high = 1
    (6663588, 23),
    (100, 7),
    (2, 2),
    (51, 6),
    (3331795, 22),

    // z1 high = 2
    (53308712, 26),
    (812, 10),
    (7, 3),
    (407, 9),
    (26654359, 25),

    // z1 high = 3
    (213234852, 28),
    (3252, 12),
    (202, 8),
    (1627, 11),
    (106617427, 27),

    // z1 high = 4
    (3411757660, 32),
    (26028, 15),
    (6506, 13),
    (13015, 14),
    (1705878831, 31),

    // z1 high = 5
    (762128756, 34),
    (208236, 18),
    (52058, 16),
    (104119, 17),
    (2528548027, 33),

    // z1 high = 6
    (3048515028, 36),
    (26654358, 25),
    (416475, 19),
    (26654357, 25),
    (1524257515, 35),

    // z1 high = 7
    (3604125524, 38),
    (1705878829, 31),
    (426469706, 29),
    (1705878828, 31),
    (1802062763, 37),

    // z1 high = 8
    (3063200425, 41),
    (3063200424, 41),
    (1531600215, 40),
    (1531600214, 40),
    (1531600213, 40),
];

pub(super) const DECODE_B1: [[i16; 3]; 89] = [
    [1, 2, -1], [-1, -1, 2], [3, 4, -1], [-1, -1, 7],
    [5, 88, -1], [6, 87, -1], [7, 8, -1], [-1, -1, 1],
    [9, 86, -1], [10, 11, -1], [-1, -1, 6], [12, 13, -1],
    [-1, -1, 17], [14, 85, -1], [15, 16, -1], [-1, -1, 11],
    [17, 84, -1], [18, 19, -1], [-1, -1, 16], [20, 21, -1],
    [-1, -1, 22], [22, 83, -1], [23, 24, -1], [-1, -1, 21],
    [25, 26, -1], [-1, -1, 27], [27, 82, -1], [28, 29, -1],
    [-1, -1, 26], [30, 81, -1], [31, 80, -1], [32, 33, -1],
    [-1, -1, 0], [34, 79, -1], [35, 36, -1], [-1, -1, 5],
    [37, 76, -1], [38, 75, -1], [39, 40, -1], [-1, -1, 10],
    [41, 74, -1], [42, 43, -1], [-1, -1, 15], [44, 45, -1],
    [-1, -1, 37], [46, 49, -1], [47, 48, -1], [-1, -1, 38],
    [-1, -1, 36], [50, 73, -1], [51, 52, -1], [-1, -1, 20],
    [53, 72, -1], [54, 55, -1], [-1, -1, 25], [56, 71, -1],
    [57, 58, -1], [-1, -1, 30], [59, 70, -1], [60, 61, -1],
    [-1, -1, 35], [62, 67, -1], [63, 66, -1], [64, 65, -1],
    [-1, -1, 41], [-1, -1, 40], [-1, -1, 44], [68, 69, -1],
    [-1, -1, 43], [-1, -1, 42], [-1, -1, 39], [-1, -1, 34],
    [-1, -1, 29], [-1, -1, 24], [-1, -1, 19], [-1, -1, 33],
    [77, 78, -1], [-1, -1, 31], [-1, -1, 14], [-1, -1, 9],
    [-1, -1, 4], [-1, -1, 32], [-1, -1, 28], [-1, -1, 23],
    [-1, -1, 18], [-1, -1, 13], [-1, -1, 8], [-1, -1, 3],
    [-1, -1, 12],
];

pub(super) const ENCODE_B2: [(u64, u32); 21] = [
    // z1 high = 0
    (24, 5),
    (0, 1),
    (13, 4),

    // z1 high = 1
    (100, 7),
    (2, 2),
    (51, 6),

    // z1 high = 2
    (404, 9),
    (7, 3),
    (203, 8),

    // z1 high = 3
    (3244, 12),
    (810, 10),
    (1623, 11),

    // z1 high = 4
    (51921, 16),
    (51920, 16),
    (25967, 15),

    // z1 high = 5
    (25966, 15),
    (25965, 15),
    (25964, 15),

    // z1 high = 6
    (25963, 15),
    (25962, 15),
    (25961, 15),
];

pub(super) const DECODE_B2: [[i16; 3]; 41] = [
    [1, 2, -1], [-1, -1, 1], [3, 4, -1], [-1, -1, 4],
    [5, 40, -1], [6, 39, -1], [7, 8, -1], [-1, -1, 0],
    [9, 38, -1], [10, 11, -1], [-1, -1, 3], [12, 37, -1],
    [13, 14, -1], [-1, -1, 6], [15, 16, -1], [-1, -1, 10],
    [17, 36, -1], [18, 19, -1], [-1, -1, 9], [20, 29, -1],
    [21, 26, -1], [22, 25, -1], [23, 24, -1], [-1, -1, 13],
    [-1, -1, 12], [-1, -1, 20], [27, 28, -1], [-1, -1, 19],
    [-1, -1, 18], [30, 33, -1], [31, 32, -1], [-1, -1, 17],
    [-1, -1, 16], [34, 35, -1], [-1, -1, 15], [-1, -1, 14],
    [-1, -1, 11], [-1, -1, 8], [-1, -1, 5], [-1, -1, 2],
    [-1, -1, 7],
];

pub(super) const ENCODE_B3: [(u64, u32); 49] = [
    // z1 high = 0
    (480170, 21),
    (119, 9),
    (3, 3),
    (1, 1),
    (2, 3),
    (118, 9),
    (240087, 20),

    // z1 high = 1
    (1920684, 23),
    (936, 12),
    (5, 5),
    (0, 3),
    (4, 5),
    (471, 11),
    (960347, 22),

    // z1 high = 2
    (7682740, 25),
    (3749, 14),
    (28, 7),
    (6, 5),
    (15, 6),
    (3748, 14),
    (3841371, 24),

    // z1 high = 3
    (61461930, 28),
    (60020, 18),
    (470, 11),
    (116, 9),
    (469, 11),
    (30011, 17),
    (61461929, 28),

    // z1 high = 4
    (983390900, 32),
    (960346, 22),
    (15004, 16),
    (3750, 14),
    (7503, 15),
    (960345, 22),
    (491695451, 31),

    // z1 high = 5
    (2849352532, 36),
    (61461928, 28),
    (960344, 22),
    (240084, 20),
    (960343, 22),
    (30730967, 27),
    (3572159915, 35),

    // z1 high = 6
    (1403737771, 37),
    (3933563604, 34),
    (245847724, 30),
    (30730966, 27),
    (122923863, 29),
    (1966781803, 33),
    (1403737770, 37),
];

pub(super) const DECODE_B3: [[i16; 3]; 97] = [
    [1, 96, -1], [2, 93, -1], [3, 4, -1], [-1, -1, 10],
    [5, 8, -1], [6, 7, -1], [-1, -1, 11], [-1, -1, 9],
    [9, 10, -1], [-1, -1, 17], [11, 92, -1], [12, 13, -1],
    [-1, -1, 16], [14, 89, -1], [15, 16, -1], [-1, -1, 24],
    [17, 86, -1], [18, 85, -1], [19, 20, -1], [-1, -1, 8],
    [21, 24, -1], [22, 23, -1], [-1, -1, 19], [-1, -1, 15],
    [25, 26, -1], [-1, -1, 31], [27, 84, -1], [28, 29, -1],
    [-1, -1, 30], [30, 83, -1], [31, 32, -1], [-1, -1, 22],
    [33, 74, -1], [34, 35, -1], [-1, -1, 38], [36, 37, -1],
    [-1, -1, 0], [38, 73, -1], [39, 40, -1], [-1, -1, 7],
    [41, 72, -1], [42, 43, -1], [-1, -1, 14], [44, 69, -1],
    [45, 48, -1], [46, 47, -1], [-1, -1, 36], [-1, -1, 27],
    [49, 50, -1], [-1, -1, 21], [51, 68, -1], [52, 53, -1],
    [-1, -1, 44], [54, 67, -1], [55, 56, -1], [-1, -1, 28],
    [57, 66, -1], [58, 59, -1], [-1, -1, 43], [60, 65, -1],
    [61, 62, -1], [-1, -1, 35], [63, 64, -1], [-1, -1, 48],
    [-1, -1, 42], [-1, -1, 41], [-1, -1, 47], [-1, -1, 34],
    [-1, -1, 46], [70, 71, -1], [-1, -1, 45], [-1, -1, 40],
    [-1, -1, 20], [-1, -1, 39], [75, 82, -1], [76, 79, -1],
    [77, 78, -1], [-1, -1, 37], [-1, -1, 33], [80, 81, -1],
    [-1, -1, 29], [-1, -1, 13], [-1, -1, 6], [-1, -1, 26],
    [-1, -1, 32], [-1, -1, 25], [87, 88, -1], [-1, -1, 23],
    [-1, -1, 12], [90, 91, -1], [-1, -1, 5], [-1, -1, 1],
    [-1, -1, 18], [94, 95, -1], [-1, -1, 4], [-1, -1, 2],
    [-1, -1, 3],
];

pub(super) const ENCODE_B4: [(u64, u32); 91] = [
    // z1 high = 0
    (16073140, 24),
    (125570, 17),
    (1966, 11),
    (72, 8),
    (14, 4),
    (1, 3),
    (2, 2),
    (0, 3),
    (7, 4),
    (123, 7),
    (1965, 11),
    (125569, 17),
    (16073139, 24),

    // z1 high = 1
    (32146283, 25),
    (502272, 19),
    (3934, 12),
    (147, 9),
    (16, 6),
    (6, 4),
    (6, 3),
    (5, 4),
    (31, 5),
    (146, 9),
    (3925, 12),
    (251143, 18),
    (32146282, 25),

    // z1 high = 2
    (257170216, 28),
    (2009097, 21),
    (31394, 15),
    (1961, 11),
    (75, 8),
    (60, 6),
    (17, 6),
    (19, 6),
    (74, 8),
    (1960, 11),
    (31393, 15),
    (2009096, 21),
    (128585111, 27),

    // z1 high = 3
    (2057361764, 31),
    (16073143, 24),
    (502284, 19),
    (15699, 14),
    (1964, 11),
    (977, 10),
    (489, 9),
    (976, 10),
    (1963, 11),
    (15698, 14),
    (502275, 19),
    (16073142, 24),
    (1028680883, 30),

    // z1 high = 4
    (1411067048, 36),
    (514340439, 29),
    (16073137, 24),
    (1004547, 20),
    (62791, 16),
    (15741, 14),
    (7871, 13),
    (15740, 14),
    (62790, 16),
    (1004546, 20),
    (16073136, 24),
    (514340438, 29),
    (2853017175, 35),

    // z1 high = 5
    (1102236309, 40),
    (2853017174, 35),
    (1028680871, 30),
    (64292553, 26),
    (4018287, 22),
    (2009099, 21),
    (1004570, 20),
    (2009098, 21),
    (4018286, 22),
    (64292552, 26),
    (1028680870, 30),
    (2853017173, 35),
    (1102236308, 40),

    // z1 high = 6
    (113977947, 42),
    (2204472620, 41),
    (1349300900, 38),
    (3934479764, 33),
    (1028680881, 30),
    (514340434, 29),
    (257170218, 28),
    (257170221, 28),
    (1028680880, 30),
    (4114723531, 32),
    (2822134099, 37),
    (1102236311, 40),
    (113977946, 42),
];

pub(super) const DECODE_B4: [[i16; 3]; 181] = [
    [1, 26, -1], [2, 5, -1], [3, 4, -1], [-1, -1, 7],
    [-1, -1, 5], [6, 23, -1], [7, 22, -1], [8, 11, -1],
    [9, 10, -1], [-1, -1, 17], [-1, -1, 32], [12, 21, -1],
    [13, 18, -1], [14, 15, -1], [-1, -1, 3], [16, 17, -1],
    [-1, -1, 22], [-1, -1, 16], [19, 20, -1], [-1, -1, 34],
    [-1, -1, 30], [-1, -1, 33], [-1, -1, 20], [24, 25, -1],
    [-1, -1, 18], [-1, -1, 8], [27, 28, -1], [-1, -1, 6],
    [29, 30, -1], [-1, -1, 19], [31, 32, -1], [-1, -1, 4],
    [33, 180, -1], [34, 35, -1], [-1, -1, 31], [36, 179, -1],
    [37, 42, -1], [38, 41, -1], [39, 40, -1], [-1, -1, 46],
    [-1, -1, 44], [-1, -1, 45], [43, 166, -1], [44, 47, -1],
    [45, 46, -1], [-1, -1, 35], [-1, -1, 29], [48, 165, -1],
    [49, 164, -1], [50, 161, -1], [51, 156, -1], [52, 155, -1],
    [53, 70, -1], [54, 69, -1], [55, 60, -1], [56, 57, -1],
    [-1, -1, 14], [58, 59, -1], [-1, -1, 61], [-1, -1, 55],
    [61, 68, -1], [62, 65, -1], [63, 64, -1], [-1, -1, 37],
    [-1, -1, 27], [66, 67, -1], [-1, -1, 72], [-1, -1, 70],
    [-1, -1, 49], [-1, -1, 11], [71, 72, -1], [-1, -1, 1],
    [73, 154, -1], [74, 75, -1], [-1, -1, 41], [76, 77, -1],
    [-1, -1, 71], [78, 151, -1], [79, 142, -1], [80, 83, -1],
    [81, 82, -1], [-1, -1, 62], [-1, -1, 54], [84, 141, -1],
    [85, 88, -1], [86, 87, -1], [-1, -1, 74], [-1, -1, 68],
    [89, 102, -1], [90, 97, -1], [91, 92, -1], [-1, -1, 26],
    [93, 94, -1], [-1, -1, 83], [95, 96, -1], [-1, -1, 75],
    [-1, -1, 67], [98, 99, -1], [-1, -1, 84], [100, 101, -1],
    [-1, -1, 63], [-1, -1, 53], [103, 140, -1], [104, 139, -1],
    [105, 108, -1], [106, 107, -1], [-1, -1, 86], [-1, -1, 82],
    [109, 138, -1], [110, 111, -1], [-1, -1, 39], [112, 137, -1],
    [113, 114, -1], [-1, -1, 81], [115, 134, -1], [116, 133, -1],
    [117, 118, -1], [-1, -1, 52], [119, 132, -1], [120, 121, -1],
    [-1, -1, 80], [122, 125, -1], [123, 124, -1], [-1, -1, 77],
    [-1, -1, 65], [126, 131, -1], [127, 128, -1], [-1, -1, 79],
    [129, 130, -1], [-1, -1, 90], [-1, -1, 78], [-1, -1, 89],
    [-1, -1, 88], [-1, -1, 76], [135, 136, -1], [-1, -1, 66],
    [-1, -1, 64], [-1, -1, 87], [-1, -1, 51], [-1, -1, 85],
    [-1, -1, 38], [-1, -1, 12], [143, 148, -1], [144, 145, -1],
    [-1, -1, 0], [146, 147, -1], [-1, -1, 25], [-1, -1, 13],
    [149, 150, -1], [-1, -1, 50], [-1, -1, 40], [152, 153, -1],
    [-1, -1, 73], [-1, -1, 69], [-1, -1, 24], [-1, -1, 36],
    [157, 158, -1], [-1, -1, 28], [159, 160, -1], [-1, -1, 60],
    [-1, -1, 56], [162, 163, -1], [-1, -1, 48], [-1, -1, 42],
    [-1, -1, 23], [-1, -1, 47], [167, 170, -1], [168, 169, -1],
    [-1, -1, 43], [-1, -1, 10], [171, 172, -1], [-1, -1, 2],
    [173, 174, -1], [-1, -1, 15], [175, 178, -1], [176, 177, -1],
    [-1, -1, 59], [-1, -1, 57], [-1, -1, 58], [-1, -1, 9],
    [-1, -1, 21],
];
